//! Tests for HeadquartersInfoAssembler

use std::collections::HashMap;
use std::sync::Arc;

use guildhq::application::services::{
    HeadquartersConfigProvider, HeadquartersInfoAssembler, HeadquartersValidator,
};
use guildhq::domain::{
    protection_radius_meters, CategoryId, CategoryInfo, CategoryLookup, Coordinate,
    GuildHeadquarters, GuildId, ProtectionTierConfig,
};
use guildhq::infrastructure::roster::{RosterCategory, RosterGuild, RosterSnapshot, RosterTier};
use guildhq::infrastructure::traits::{CategoryCatalog, CollaboratorError, GuildDirectory};
use guildhq::util::testing;

fn guild(id: u64, level: i32, category: Option<u64>, at: Option<(f64, f64)>) -> RosterGuild {
    RosterGuild {
        id: GuildId(id),
        name: format!("Guild {id}"),
        level,
        active: true,
        category_id: category.map(CategoryId),
        latitude: at.map(|(lat, _)| lat),
        longitude: at.map(|(_, lon)| lon),
    }
}

fn roster() -> RosterSnapshot {
    RosterSnapshot {
        tiers: vec![RosterTier {
            base_radius_meters: 200,
            radius_increase_per_level_tier: 50,
            level_tier_size: 5,
            active: true,
        }],
        categories: vec![RosterCategory {
            id: CategoryId(1),
            name: "Cycling".into(),
            icon: Some("bike".into()),
        }],
        guilds: vec![
            guild(1, 3, Some(1), Some((37.50, 127.00))),
            guild(2, 12, Some(7), Some((37.60, 127.10))),
            guild(3, 26, None, Some((35.10, 129.00))),
            guild(4, 40, Some(1), None),
            RosterGuild {
                active: false,
                ..guild(5, 9, Some(1), Some((33.4, 126.5)))
            },
        ],
    }
}

fn assembler_for(roster: Arc<RosterSnapshot>) -> HeadquartersInfoAssembler {
    testing::init_test_setup();
    let provider = Arc::new(HeadquartersConfigProvider::new(roster.clone()));
    HeadquartersInfoAssembler::new(roster.clone(), roster, provider)
}

#[test]
fn given_roster_when_assembling_then_one_entry_per_active_headquarters() {
    // Arrange
    let assembler = assembler_for(Arc::new(roster()));

    // Act
    let map = assembler.all_headquarters().unwrap();

    // Assert
    let ids: Vec<u64> = map.headquarters.iter().map(|h| h.guild_id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(map.config, ProtectionTierConfig::new(200, 50, 5));
}

#[test]
fn given_roster_when_assembling_then_radius_matches_policy() {
    let assembler = assembler_for(Arc::new(roster()));

    let map = assembler.all_headquarters().unwrap();

    for hq in &map.headquarters {
        assert_eq!(
            hq.protection_radius_meters,
            protection_radius_meters(hq.level, &map.config),
            "guild {}",
            hq.guild_id
        );
    }
    let radii: Vec<u32> = map
        .headquarters
        .iter()
        .map(|h| h.protection_radius_meters)
        .collect();
    assert_eq!(radii, vec![200, 300, 450]);
}

#[test]
fn given_same_roster_when_validating_and_assembling_then_same_config_and_radius() {
    // Arrange
    let roster = Arc::new(roster());
    let provider = Arc::new(HeadquartersConfigProvider::new(roster.clone()));
    let validator = HeadquartersValidator::new(roster.clone(), provider.clone());
    let assembler = HeadquartersInfoAssembler::new(roster.clone(), roster, provider);

    // Act
    let map = assembler.all_headquarters().unwrap();
    let result = validator
        .validate(Coordinate::new(37.60, 127.10), None)
        .unwrap();

    // Assert
    assert_eq!(result.config, map.config);
    let hq = map
        .headquarters
        .iter()
        .find(|h| h.guild_id == GuildId(2))
        .unwrap();
    assert_eq!(
        result.conflicts[0].protection_radius_meters,
        hq.protection_radius_meters
    );
}

#[test]
fn given_known_and_unknown_categories_when_assembling_then_unknown_left_empty() {
    let assembler = assembler_for(Arc::new(roster()));

    let map = assembler.all_headquarters().unwrap();

    let by_id: HashMap<u64, _> = map.headquarters.iter().map(|h| (h.guild_id.0, h)).collect();
    assert_eq!(by_id[&1].category_name.as_deref(), Some("Cycling"));
    assert_eq!(by_id[&1].category_icon.as_deref(), Some("bike"));
    assert_eq!(by_id[&2].category_id, Some(CategoryId(7)));
    assert_eq!(by_id[&2].category_name, None);
    assert_eq!(by_id[&3].category_name, None);
}

/// Catalog that fails for every id except one
struct FlakyCatalog;

impl CategoryCatalog for FlakyCatalog {
    fn lookup(&self, id: CategoryId) -> CategoryLookup {
        if id == CategoryId(7) {
            CategoryLookup::Found(CategoryInfo {
                name: "Swimming".into(),
                icon: None,
            })
        } else {
            CategoryLookup::Failed(format!("category service timed out for {id}"))
        }
    }
}

#[test]
fn given_failing_category_lookup_when_assembling_then_fields_empty_and_assembly_succeeds() {
    // Arrange
    let roster = Arc::new(roster());
    let provider = Arc::new(HeadquartersConfigProvider::new(roster.clone()));
    let assembler = HeadquartersInfoAssembler::new(roster, Arc::new(FlakyCatalog), provider);

    // Act
    let map = assembler.all_headquarters().unwrap();

    // Assert
    assert_eq!(map.headquarters.len(), 3);
    assert_eq!(map.headquarters[0].category_name, None);
    assert_eq!(map.headquarters[0].category_icon, None);
    assert_eq!(map.headquarters[1].category_name.as_deref(), Some("Swimming"));
    assert_eq!(map.headquarters[1].category_icon, None);
}

#[test]
fn given_no_headquarters_when_assembling_then_empty_with_default_config() {
    let assembler = assembler_for(Arc::new(RosterSnapshot::default()));

    let map = assembler.all_headquarters().unwrap();

    assert!(map.headquarters.is_empty());
    assert_eq!(map.config, ProtectionTierConfig::DEFAULT);
}

struct DownDirectory;

impl GuildDirectory for DownDirectory {
    fn headquartered_guilds(&self) -> Result<Vec<GuildHeadquarters>, CollaboratorError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "directory timed out",
        )))
    }

    fn headquartered_guilds_excluding(
        &self,
        _exclude: GuildId,
    ) -> Result<Vec<GuildHeadquarters>, CollaboratorError> {
        self.headquartered_guilds()
    }
}

#[test]
fn given_failing_directory_when_assembling_then_error_propagates() {
    let store = Arc::new(RosterSnapshot::default());
    let provider = Arc::new(HeadquartersConfigProvider::new(store.clone()));
    let assembler = HeadquartersInfoAssembler::new(Arc::new(DownDirectory), store, provider);

    let err = assembler.all_headquarters().unwrap_err();

    assert!(!err.is_location_conflict());
    let source = std::error::Error::source(&err).expect("source kept");
    assert!(source.to_string().contains("timed out"));
}
