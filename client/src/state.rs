use std::sync::{Arc, PoisonError, RwLock};

use clover_protocol::ReferenceData;
use tracing::{info, warn};

use crate::{Dataset, ResourceError, Transport, UsageClient};

/// Reference data shared between the loader and every view.
///
/// Starts empty. The loader writes one dataset at a time as each fetch
/// finishes; readers take an immutable [`ReferenceData`] snapshot.
#[derive(Debug, Default)]
pub struct SharedData {
    data: RwLock<ReferenceData>,
}

impl SharedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents. Datasets that have not loaded are empty.
    pub fn snapshot(&self) -> ReferenceData {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply a single-field update
    pub fn update(&self, merge: impl FnOnce(&mut ReferenceData)) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        merge(&mut data);
    }
}

/// Outcome of [`load_reference_data`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<Dataset>,
    pub failed: Vec<Dataset>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch all six reference datasets concurrently into `shared`.
///
/// Each dataset is merged as soon as it arrives, independent of the others.
/// A dataset that fails stays empty; there is no retry.
pub async fn load_reference_data<T: Transport>(
    client: &UsageClient<T>,
    shared: &SharedData,
) -> LoadReport {
    let (pokedex, moves, items, abilities, battle_icons, formats) = futures_util::join!(
        async { merge(shared, client.pokedex().await, |data, v| data.pokedex = v) },
        async { merge(shared, client.moves().await, |data, v| data.moves = v) },
        async { merge(shared, client.items().await, |data, v| data.items = v) },
        async { merge(shared, client.abilities().await, |data, v| data.abilities = v) },
        async {
            merge(shared, client.battle_icon_indexes().await, |data, v| {
                data.battle_icon_indexes = v
            })
        },
        async { merge(shared, client.formats().await, |data, v| data.formats = v) },
    );

    let outcomes = [
        (Dataset::Pokedex, pokedex),
        (Dataset::Moves, moves),
        (Dataset::Items, items),
        (Dataset::Abilities, abilities),
        (Dataset::BattleIcons, battle_icons),
        (Dataset::Formats, formats),
    ];

    let mut report = LoadReport::default();
    for (dataset, outcome) in outcomes {
        match outcome {
            Ok(()) => report.loaded.push(dataset),
            Err(e) => {
                warn!(dataset = %dataset, error = %e, "Reference dataset left empty");
                report.failed.push(dataset);
            }
        }
    }

    info!(
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        "Reference data loaded"
    );
    report
}

fn merge<V>(
    shared: &SharedData,
    result: Result<Arc<V>, ResourceError>,
    apply: impl FnOnce(&mut ReferenceData, Arc<V>),
) -> Result<(), ResourceError> {
    let value = result?;
    shared.update(|data| apply(data, value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    const BASE: &str = "https://usage.test";

    fn full_transport() -> FakeTransport {
        let transport = FakeTransport::new();
        transport.respond(
            &format!("{}/data/pokedex.json", BASE),
            json!({
                "clefable": {
                    "num": 36,
                    "name": "Clefable",
                    "types": ["Fairy"],
                    "abilities": { "0": "Cute Charm", "1": "Magic Guard", "H": "Unaware" },
                    "baseStats": { "hp": 95, "atk": 70, "def": 73, "spa": 95, "spd": 90, "spe": 60 }
                }
            }),
        );
        transport.respond(
            &format!("{}/data/moves.json", BASE),
            json!({ "moonblast": { "name": "Moonblast", "type": "Fairy", "category": "Special", "basePower": 95, "accuracy": 100 } }),
        );
        transport.respond(
            &format!("{}/data/items.json", BASE),
            json!({ "leftovers": { "name": "Leftovers", "spritenum": 242 } }),
        );
        transport.respond(
            &format!("{}/data/abilities.json", BASE),
            json!({ "magicguard": { "name": "Magic Guard", "shortDesc": "Only damaged by attacks." } }),
        );
        transport.respond(
            &format!("{}/data/battle-icons.json", BASE),
            json!({ "indexes": { "clefable": 40 }, "indexesLeft": {} }),
        );
        transport.respond(
            &format!("{}/data/formats.json", BASE),
            json!([{ "section": "S/V" }, { "name": "[Gen 9] OU" }]),
        );
        transport
    }

    #[tokio::test]
    async fn test_load_all_datasets() {
        let client = UsageClient::with_transport(full_transport(), BASE);
        let shared = SharedData::new();

        let report = load_reference_data(&client, &shared).await;

        assert!(report.is_complete());
        assert_eq!(report.loaded.len(), 6);

        let data = shared.snapshot();
        assert_eq!(data.species_name("clefable"), "Clefable");
        assert_eq!(data.moves["moonblast"].base_power, Some(95));
        assert_eq!(data.items["leftovers"].sprite_num, 242);
        assert_eq!(data.abilities["magicguard"].name, "Magic Guard");
        assert_eq!(data.battle_icon_indexes.indexes["clefable"], 40);
        assert_eq!(data.format_name("gen9ou"), "[Gen 9] OU");
    }

    #[tokio::test]
    async fn test_datasets_merge_as_they_arrive() {
        let transport = full_transport();
        let gate = transport.gate(&format!("{}/data/pokedex.json", BASE));
        let client = UsageClient::with_transport(transport, BASE);
        let shared = SharedData::new();

        let (report, ()) = tokio::join!(load_reference_data(&client, &shared), async {
            while shared.snapshot().formats.is_empty() {
                tokio::task::yield_now().await;
            }
            // everything but the held pokedex is visible already
            let data = shared.snapshot();
            assert!(data.pokedex.is_empty());
            assert_eq!(data.moves["moonblast"].name, "Moonblast");
            assert_eq!(data.format_name("gen9ou"), "[Gen 9] OU");
            gate.notify_one();
        });

        assert!(report.is_complete());
        assert_eq!(report.loaded.len(), 6);
        assert_eq!(shared.snapshot().species_name("clefable"), "Clefable");
    }

    #[tokio::test]
    async fn test_failed_dataset_stays_empty() {
        let transport = full_transport();
        transport.respond_raw(&format!("{}/data/moves.json", BASE), b"{".to_vec());
        let client = UsageClient::with_transport(transport, BASE);
        let shared = SharedData::new();

        let report = load_reference_data(&client, &shared).await;

        assert_eq!(report.failed, vec![Dataset::Moves]);
        assert_eq!(report.loaded.len(), 5);

        let data = shared.snapshot();
        assert!(data.moves.is_empty());
        assert_eq!(data.species_name("clefable"), "Clefable");
    }

    #[tokio::test]
    async fn test_merges_do_not_clobber_each_other() {
        let shared = SharedData::new();
        let before = shared.snapshot();

        let client = UsageClient::with_transport(full_transport(), BASE);
        let items = client.items().await;
        let formats = client.formats().await;

        merge(&shared, formats, |data, v| data.formats = v).unwrap();
        merge(&shared, items, |data, v| data.items = v).unwrap();

        let after = shared.snapshot();
        assert_eq!(after.items.len(), 1);
        assert_eq!(after.formats.len(), 1);
        assert!(after.pokedex.is_empty());

        // earlier snapshots are unaffected by later merges
        assert!(before.items.is_empty());
    }

    #[tokio::test]
    async fn test_reload_uses_cache() {
        let client = UsageClient::with_transport(full_transport(), BASE);

        load_reference_data(&client, &SharedData::new()).await;
        let report = load_reference_data(&client, &SharedData::new()).await;

        assert!(report.is_complete());
        assert_eq!(client.transport.hits("data/pokedex.json"), 1);
        assert_eq!(client.transport.hits("data/formats.json"), 1);
    }
}
