#[cfg(test)]
mod tests {
    use crate::{StatsSnapshot, UsagePath, WinUsage, decode};

    const DAY_SNAPSHOT: &str = r#"{
        "subsections": [],
        "totalTeams": 120,
        "pokemonStats": {
            "garchomp": {
                "usage": 40,
                "win": 22,
                "partner": { "clefable": { "usage": 12, "win": 7 } },
                "against": {},
                "item": { "choicescarf": { "usage": 10, "win": 4 } },
                "ability": { "roughskin": { "usage": 40, "win": 22 } },
                "nature": { "jolly": { "usage": 30, "win": 18 } },
                "move": { "earthquake": { "usage": 40, "win": 22 } }
            }
        }
    }"#;

    #[test]
    fn test_decode_browsable() {
        let snapshot: StatsSnapshot = decode(br#"{"subsections":["gen9ou","gen9ubers"]}"#).unwrap();

        assert_eq!(
            snapshot,
            StatsSnapshot::Browsable {
                subsections: vec!["gen9ou".to_string(), "gen9ubers".to_string()],
            }
        );
        assert!(!snapshot.is_terminal());
        assert_eq!(snapshot.total_teams(), None);
    }

    #[test]
    fn test_decode_terminal() {
        let snapshot: StatsSnapshot = decode(DAY_SNAPSHOT.as_bytes()).unwrap();

        assert!(snapshot.is_terminal());
        assert_eq!(snapshot.total_teams(), Some(120));

        let garchomp = snapshot.species("garchomp").unwrap();
        assert_eq!(garchomp.totals(), WinUsage::new(40, 22));
        assert_eq!(garchomp.partner["clefable"], WinUsage::new(12, 7));
        assert_eq!(garchomp.moves["earthquake"].usage, 40);
        assert!(garchomp.against.is_empty());
    }

    #[test]
    fn test_decode_partial_terminal_fails() {
        let result = decode::<StatsSnapshot>(br#"{"subsections":[],"totalTeams":3}"#);
        assert!(result.is_err());

        let result = decode::<StatsSnapshot>(br#"{"subsections":[],"pokemonStats":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(decode::<StatsSnapshot>(br#"{"subsections":"gen9ou"}"#).is_err());
        assert!(decode::<StatsSnapshot>(br#"{}"#).is_err());
        assert!(decode::<StatsSnapshot>(b"<html>not found</html>").is_err());

        let negative = r#"{"subsections":[],"totalTeams":1,"pokemonStats":{"a":{"usage":-1,"win":0,"partner":{},"against":{},"item":{},"ability":{},"nature":{},"move":{}}}}"#;
        assert!(decode::<StatsSnapshot>(negative.as_bytes()).is_err());
    }

    #[test]
    fn test_species_stats_missing_map_fails() {
        let json = r#"{"subsections":[],"totalTeams":1,"pokemonStats":{"a":{"usage":1,"win":0,"partner":{},"against":{},"item":{},"ability":{},"nature":{}}}}"#;
        assert!(decode::<StatsSnapshot>(json.as_bytes()).is_err());
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(WinUsage::new(10, 5).win_rate(), Some(0.5));
        assert_eq!(WinUsage::new(0, 0).win_rate(), None);
    }

    #[test]
    fn test_usage_path_resource() {
        assert_eq!(UsagePath::root().to_resource_path(), "usage//index.json");

        let day = UsagePath::from_segments(["gen9ou", "2024", "05", "17"]).unwrap();
        assert_eq!(day.to_resource_path(), "usage/gen9ou/2024/05/17/index.json");
        assert_eq!(day.format(), Some("gen9ou"));
        assert_eq!(day.to_string(), "/gen9ou/2024/05/17");
    }

    #[test]
    fn test_usage_path_depth_limit() {
        let day = UsagePath::from_segments(["gen9ou", "2024", "05", "17"]).unwrap();
        assert!(day.child("extra").is_none());
        assert!(UsagePath::from_segments(["a", "b", "c", "d", "e"]).is_none());

        let year = UsagePath::root().child("gen9ou").and_then(|p| p.child("2024")).unwrap();
        assert_eq!(year.segments(), ["gen9ou", "2024"]);
        assert_eq!(year.depth(), 2);
    }
}
