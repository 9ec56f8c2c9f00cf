//! Discard-pile display helpers for the `discards` server message.
//!
//! The server reveals one field per pile, keyed `<owner>_discards`. Player
//! piles (`player<N>_discards`) are listed first in seat order, anything else
//! follows alphabetically.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

pub const DISCARDS_SUFFIX: &str = "_discards";

/// Seat number of a `player<N>_discards` key, `None` for any other key.
fn player_number(key: &str) -> Option<u64> {
    let digits = key.strip_prefix("player")?.strip_suffix(DISCARDS_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Ordering used when displaying discard fields.
pub fn compare_discard_keys(a: &str, b: &str) -> Ordering {
    match (player_number(a), player_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// The `*_discards` fields of a `discards` message, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscardPiles {
    piles: Vec<(String, String)>,
}

impl DiscardPiles {
    pub fn from_fields(fields: &BTreeMap<String, Value>) -> Self {
        let mut piles: Vec<(String, String)> = fields
            .iter()
            .filter(|(key, _)| key.ends_with(DISCARDS_SUFFIX))
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect();
        piles.sort_by(|(a, _), (b, _)| compare_discard_keys(a, b));
        Self { piles }
    }

    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.piles.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.piles.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.piles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for DiscardPiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_keys_sort_numerically_before_others() {
        let mut keys = vec![
            "player10_discards",
            "player2_discards",
            "deck_discards",
            "player1_discards",
        ];
        keys.sort_by(|a, b| compare_discard_keys(a, b));
        assert_eq!(
            keys,
            vec![
                "player1_discards",
                "player2_discards",
                "player10_discards",
                "deck_discards",
            ]
        );
    }

    #[test]
    fn near_miss_keys_are_not_player_keys() {
        assert_eq!(player_number("player_discards"), None);
        assert_eq!(player_number("playerX_discards"), None);
        assert_eq!(player_number("player-1_discards"), None);
        assert_eq!(player_number("Player1_discards"), None);
        assert_eq!(player_number("player3_discards"), Some(3));
        assert_eq!(
            compare_discard_keys("player_discards", "player9_discards"),
            Ordering::Greater
        );
    }

    #[test]
    fn leading_zeros_compare_by_value() {
        assert_eq!(
            compare_discard_keys("player02_discards", "player10_discards"),
            Ordering::Less
        );
        // same seat, different spelling: fall back to lexical order
        assert_eq!(
            compare_discard_keys("player01_discards", "player1_discards"),
            Ordering::Less
        );
    }

    #[test]
    fn only_discard_fields_are_collected() {
        let fields: BTreeMap<String, Value> = serde_json::from_value(json!({
            "room_id": "room1",
            "player2_discards": "1A,TD",
            "player1_discards": "",
            "bonus": 3,
            "pool_discards": ["x", "y"],
        }))
        .unwrap();

        let piles = DiscardPiles::from_fields(&fields);
        assert_eq!(piles.len(), 3);
        assert_eq!(
            piles.keys().collect::<Vec<_>>(),
            vec!["player1_discards", "player2_discards", "pool_discards"]
        );
        assert_eq!(
            piles.iter().nth(1),
            Some(("player2_discards", "1A,TD"))
        );
        assert_eq!(
            piles.to_string(),
            "player1_discards= player2_discards=1A,TD pool_discards=[\"x\",\"y\"]"
        );
    }

    #[test]
    fn no_fields_formats_empty() {
        let piles = DiscardPiles::from_fields(&BTreeMap::new());
        assert!(piles.is_empty());
        assert_eq!(piles.to_string(), "");
    }
}
