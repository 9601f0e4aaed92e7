//! End-to-end tests over real on-disk package trees.
//!
//! These build complete game/user data layouts in temporary directories and
//! exercise the whole stack: descriptor loading, registry scan, search path
//! construction, forward resolution and relativization.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use packlayer::{build_search_path, PackageManager, ResourceCategory};

struct GameData {
    game: TempDir,
    user: TempDir,
}

impl GameData {
    fn new() -> Self {
        Self {
            game: TempDir::new().unwrap(),
            user: TempDir::new().unwrap(),
        }
    }

    fn add_package(&self, name: &str, descriptor: &str) {
        let dir = self.game.path().join("packages").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.ini"), descriptor).unwrap();
    }

    fn add_game_file(&self, package: &str, relative: &str) -> PathBuf {
        write_file(&self.game.path().join("packages").join(package).join(relative))
    }

    fn add_user_file(&self, package: &str, relative: &str) -> PathBuf {
        write_file(&self.user.path().join("packages").join(package).join(relative))
    }

    fn manager(&self) -> PackageManager {
        PackageManager::new(self.game.path(), self.user.path())
    }
}

fn write_file(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"data").unwrap();
    path.to_path_buf()
}

fn search_path_names(manager: &PackageManager) -> Vec<String> {
    manager
        .search_path()
        .iter()
        .map(|entry| entry.package.clone())
        .collect()
}

#[test]
fn dependency_chain_orders_most_specific_first() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("expansion", "[package]\ndependencies = base\n");
    data.add_package("mod", "[package]\ndependencies = expansion\n");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    assert_eq!(search_path_names(&manager), ["mod", "expansion", "base"]);
}

#[test]
fn dependency_cycle_is_tolerated() {
    let data = GameData::new();
    data.add_package("ping", "[package]\ndependencies = pong\n");
    data.add_package("pong", "[package]\ndependencies = ping\n");

    let mut manager = data.manager();
    manager.set_current_package("ping").unwrap();

    assert_eq!(search_path_names(&manager), ["ping", "pong"]);
}

#[test]
fn dangling_dependency_is_skipped() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package(
        "mod",
        "[package]\ndependencies = removed_long_ago, base\n",
    );

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    assert_eq!(search_path_names(&manager), ["mod", "base"]);
}

#[test]
fn search_path_rebuild_is_deterministic() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();
    let first = manager.search_path().clone();

    manager.set_current_package("base").unwrap();
    manager.set_current_package("mod").unwrap();

    assert_eq!(*manager.search_path(), first);
}

#[test]
fn base_and_mod_scenario_resolves_the_override() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");
    data.add_game_file("base", "pixmaps/hero.png");
    let mod_hero = data.add_game_file("mod", "pixmaps/hero.png");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    assert_eq!(manager.pixmap_image_path("hero"), Some(mod_hero));
}

#[test]
fn user_file_beats_game_file_of_the_same_package() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_game_file("base", "pixmaps/hero.png");
    let user_hero = data.add_user_file("base", "pixmaps/hero.png");

    let manager = data.manager();

    assert_eq!(manager.pixmap_image_path("hero"), Some(user_hero));
}

#[test]
fn dependent_user_file_beats_dependency_user_file() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");
    data.add_user_file("base", "pixmaps/hero.png");
    let mod_user_hero = data.add_user_file("mod", "pixmaps/hero.png");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    assert_eq!(manager.pixmap_image_path("hero"), Some(mod_user_hero));
}

#[test]
fn resolved_paths_round_trip_through_relativization() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");
    data.add_game_file("base", "music/theme.ogg");
    data.add_user_file("mod", "sounds/jump.ogg");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    for (category, name) in [
        (ResourceCategory::Music, "theme"),
        (ResourceCategory::Sound, "jump"),
    ] {
        let resolved = manager.resource_path(category, name, &[]).unwrap();
        let relative = manager
            .relative_resource_path(category, &resolved)
            .unwrap();
        let name = relative.to_string_lossy();
        assert_eq!(
            manager.resource_path(category, &name, &[]),
            Some(resolved),
            "round trip failed for {category}"
        );
    }
}

#[test]
fn stale_selection_falls_back_to_the_base_package() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    std::fs::remove_dir_all(data.game.path().join("packages").join("mod")).unwrap();
    manager.rescan();

    // The search path must fall back to the base package, not come out
    // empty.
    assert_eq!(search_path_names(&manager), ["base"]);
}

#[test]
fn relativize_rejects_paths_outside_every_package() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    let foreign = write_file(&data.game.path().join("elsewhere").join("hero.png"));

    let manager = data.manager();

    assert!(manager.relative_pixmap_path(&foreign).is_err());
}

#[test]
fn hidden_packages_resolve_like_any_other_dependency() {
    let data = GameData::new();
    data.add_package("base", "[package]\nhidden = true\n");
    data.add_package("mod", "[package]\ndependencies = base\n");
    let hero = data.add_game_file("base", "pixmaps/hero.png");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    // Hidden only affects listings, not traversal.
    assert_eq!(manager.pixmap_image_path("hero"), Some(hero));
}

#[test]
fn scripts_resolve_within_their_own_package_closure() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");
    let base_script = data.add_game_file("base", "scripting/objects/box.lua");
    let mod_script = data.add_game_file("mod", "scripting/objects/box.lua");

    let manager = data.manager();

    // Current package is "base", but the mod's scripts resolve within the
    // mod's closure and shadow base's.
    assert_eq!(manager.script_path("mod", "objects/box"), Some(mod_script));
    assert_eq!(
        manager.script_path("base", "objects/box"),
        Some(base_script)
    );
}

#[test]
fn pure_search_path_matches_manager_view() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");
    data.add_package("mod", "[package]\ndependencies = base\n");

    let mut manager = data.manager();
    manager.set_current_package("mod").unwrap();

    let rebuilt = build_search_path(manager.registry(), "mod");
    assert_eq!(rebuilt, *manager.search_path());
}

#[test]
fn missing_resource_reports_not_found() {
    let data = GameData::new();
    data.add_package("base", "[package]\n");

    let manager = data.manager();

    assert_eq!(manager.music_path("no_such_track"), None);
    assert_eq!(manager.sound_path("no_such_effect"), None);
}
