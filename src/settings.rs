//! Runner settings read from environment variables.
//!
//! - `BLOCKFALL_SEED`: u32 seed for piece generation (random when unset)
//! - `BLOCKFALL_PIECE_RULE`: `uniform` (default) or `bag7`
//! - `BLOCKFALL_TRACE`: path of a JSON-lines event trace (off when unset)

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::PieceRule;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const PIECE_RULE_VAR: &str = "BLOCKFALL_PIECE_RULE";
pub const TRACE_VAR: &str = "BLOCKFALL_TRACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u32,
    pub piece_rule: PieceRule,
    pub trace_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = match get(SEED_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("{SEED_VAR}: invalid seed `{raw}`"))?,
            None => rand::random::<u32>(),
        };

        let piece_rule = match get(PIECE_RULE_VAR) {
            Some(raw) => PieceRule::from_str(&raw)
                .ok_or_else(|| anyhow!("unknown piece rule `{raw}` (expected uniform or bag7)"))
                .with_context(|| format!("{PIECE_RULE_VAR} is invalid"))?,
            None => PieceRule::default(),
        };

        let trace_path = get(TRACE_VAR).map(PathBuf::from);

        Ok(Self {
            seed,
            piece_rule,
            trace_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let s = Settings::from_lookup(lookup(&[
            (SEED_VAR, "12345"),
            (PIECE_RULE_VAR, "Bag7"),
            (TRACE_VAR, "/tmp/blockfall.jsonl"),
        ]))
        .unwrap();

        assert_eq!(s.seed, 12345);
        assert_eq!(s.piece_rule, PieceRule::Bag7);
        assert_eq!(s.trace_path, Some(PathBuf::from("/tmp/blockfall.jsonl")));
    }

    #[test]
    fn test_defaults_when_unset_or_blank() {
        let s = Settings::from_lookup(lookup(&[(TRACE_VAR, "  ")])).unwrap();
        assert_eq!(s.piece_rule, PieceRule::Uniform);
        assert_eq!(s.trace_path, None);
    }

    #[test]
    fn test_bad_seed_names_variable() {
        let err = Settings::from_lookup(lookup(&[(SEED_VAR, "-3")])).unwrap_err();
        assert!(format!("{err:#}").contains(SEED_VAR));
    }

    #[test]
    fn test_bad_rule_names_variable() {
        let err = Settings::from_lookup(lookup(&[(PIECE_RULE_VAR, "tgm")])).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains(PIECE_RULE_VAR));
        assert!(msg.contains("tgm"));
    }
}
