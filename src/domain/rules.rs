use std::fmt;
use std::str::FromStr;

use super::CellState;
use crate::error::RuleError;

/// Highest neighbor count a Moore neighborhood can produce
pub const MAX_NEIGHBORS: u8 = 8;

/// Validated set of neighbor counts in `0..=8`, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct NeighborSet(u16);

impl NeighborSet {
    /// The set that never matches
    pub const EMPTY: Self = Self(0);

    /// Build from trusted literal counts. Callers guarantee every count is
    /// at most 8 and appears once.
    const fn from_literal(counts: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < counts.len() {
            bits |= 1 << counts[i];
            i += 1;
        }
        Self(bits)
    }

    /// Build from user-supplied counts, rejecting duplicates and values
    /// above 8.
    pub fn from_counts(counts: &[u8]) -> Result<Self, RuleError> {
        counts.iter().try_fold(Self::EMPTY, |set, &value| set.with(value))
    }

    fn with(self, value: u8) -> Result<Self, RuleError> {
        if value > MAX_NEIGHBORS {
            return Err(RuleError::OutOfRange { value: value.into() });
        }
        if self.contains(value) {
            return Err(RuleError::Duplicate { value });
        }
        Ok(Self(self.0 | 1 << value))
    }

    pub const fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.0 & (1 << count) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts in ascending order
    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBORS).filter(move |&count| self.contains(count))
    }

    /// Parse a comma separated list such as `"2,3"`. Blank input is the
    /// empty set.
    pub fn parse_list(input: &str) -> Result<Self, RuleError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_fold(Self::EMPTY, |set, token| set.with(parse_count(token)?))
    }

    /// Parse the digit run of `B`/`S` notation, such as `"23"`.
    fn parse_digits(input: &str) -> Result<Self, RuleError> {
        input.chars().try_fold(Self::EMPTY, |set, ch| {
            let value = ch.to_digit(10).ok_or_else(|| RuleError::Parse {
                input: input.to_owned(),
            })?;
            set.with(narrow(value)?)
        })
    }

    fn digits(self) -> String {
        self.counts().map(|count| count.to_string()).collect()
    }
}

fn parse_count(token: &str) -> Result<u8, RuleError> {
    let value: u32 = token.parse().map_err(|_| RuleError::Parse {
        input: token.to_owned(),
    })?;
    narrow(value)
}

fn narrow(value: u32) -> Result<u8, RuleError> {
    u8::try_from(value)
        .ok()
        .filter(|&count| count <= MAX_NEIGHBORS)
        .ok_or(RuleError::OutOfRange { value })
}

impl FromStr for NeighborSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<String> = self.counts().map(|count| count.to_string()).collect();
        f.write_str(&counts.join(","))
    }
}

/// Life-like rule: which neighbor counts give birth to a dead cell and which
/// keep an alive cell alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct LifeRule {
    pub birth: NeighborSet,
    pub survive: NeighborSet,
}

impl LifeRule {
    pub const fn new(birth: NeighborSet, survive: NeighborSet) -> Self {
        Self { birth, survive }
    }

    /// Build from raw count lists, failing on the first bad value
    pub fn from_counts(birth: &[u8], survive: &[u8]) -> Result<Self, RuleError> {
        Ok(Self::new(
            NeighborSet::from_counts(birth)?,
            NeighborSet::from_counts(survive)?,
        ))
    }

    /// Parse comma separated birth and survival lists, such as `"3"` and
    /// `"2,3"`
    pub fn parse_lists(birth: &str, survive: &str) -> Result<Self, RuleError> {
        Ok(Self::new(
            NeighborSet::parse_list(birth)?,
            NeighborSet::parse_list(survive)?,
        ))
    }

    /// Conway's Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new(NeighborSet::from_literal(&[3]), NeighborSet::from_literal(&[2, 3]))
    }

    /// HighLife (B36/S23), known for its replicator
    pub const fn high_life() -> Self {
        Self::new(NeighborSet::from_literal(&[3, 6]), NeighborSet::from_literal(&[2, 3]))
    }

    /// Seeds (B2/S), every alive cell dies each generation
    pub const fn seeds() -> Self {
        Self::new(NeighborSet::from_literal(&[2]), NeighborSet::EMPTY)
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub const fn day_and_night() -> Self {
        Self::new(
            NeighborSet::from_literal(&[3, 6, 7, 8]),
            NeighborSet::from_literal(&[3, 4, 6, 7, 8]),
        )
    }

    /// Next state of a cell given its live neighbor count
    pub const fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match current {
            CellState::Dead if self.birth.contains(neighbors) => CellState::Alive,
            CellState::Alive if !self.survive.contains(neighbors) => CellState::Dead,
            unchanged => unchanged,
        }
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::conway()
    }
}

/// Parses `B3/S23` notation, case-insensitive. Either half may be empty
/// (`B2/S`).
impl FromStr for LifeRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || RuleError::Parse { input: s.to_owned() };
        let upper = s.trim().to_ascii_uppercase();
        let (birth, survive) = upper.split_once('/').ok_or_else(parse_error)?;
        let birth = birth.strip_prefix('B').ok_or_else(parse_error)?;
        let survive = survive.strip_prefix('S').ok_or_else(parse_error)?;

        Ok(Self::new(
            NeighborSet::parse_digits(birth)?,
            NeighborSet::parse_digits(survive)?,
        ))
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth.digits(), self.survive.digits())
    }
}

/// Get all named rules
pub fn all_rules() -> Vec<(&'static str, LifeRule)> {
    vec![
        ("Conway", LifeRule::conway()),
        ("HighLife", LifeRule::high_life()),
        ("Seeds", LifeRule::seeds()),
        ("Day&Night", LifeRule::day_and_night()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = LifeRule::conway();

        // Underpopulation
        assert_eq!(rule.evolve(CellState::Alive, 0), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Alive, 1), CellState::Dead);

        // Survival
        assert_eq!(rule.evolve(CellState::Alive, 2), CellState::Alive);
        assert_eq!(rule.evolve(CellState::Alive, 3), CellState::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(CellState::Alive, 4), CellState::Dead);

        // Reproduction
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Alive);
        assert_eq!(rule.evolve(CellState::Dead, 2), CellState::Dead);
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = LifeRule::seeds();
        for n in 0..=8 {
            assert_eq!(rule.evolve(CellState::Alive, n), CellState::Dead);
        }
        assert_eq!(rule.evolve(CellState::Dead, 2), CellState::Alive);
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Dead);
    }

    #[test]
    fn test_from_counts_rejects_bad_values() {
        assert_eq!(
            NeighborSet::from_counts(&[3, 9]),
            Err(RuleError::OutOfRange { value: 9 })
        );
        assert_eq!(
            NeighborSet::from_counts(&[2, 3, 2]),
            Err(RuleError::Duplicate { value: 2 })
        );
        assert_eq!(NeighborSet::from_counts(&[]), Ok(NeighborSet::EMPTY));
        assert_eq!(
            LifeRule::from_counts(&[3], &[2, 3]),
            Ok(LifeRule::conway())
        );
    }

    #[test]
    fn test_parse_list() {
        let set: NeighborSet = " 2, 3 ".parse().unwrap();
        assert_eq!(set.counts().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(set.to_string(), "2,3");

        assert_eq!(NeighborSet::parse_list(""), Ok(NeighborSet::EMPTY));
        assert_eq!(
            NeighborSet::parse_list("3,12"),
            Err(RuleError::OutOfRange { value: 12 })
        );
        assert!(matches!(
            NeighborSet::parse_list("3,x"),
            Err(RuleError::Parse { .. })
        ));
        assert!(matches!(
            NeighborSet::parse_list("-1"),
            Err(RuleError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(LifeRule::parse_lists("3", "2,3"), Ok(LifeRule::conway()));
        assert_eq!(LifeRule::parse_lists("2", ""), Ok(LifeRule::seeds()));
        assert_eq!(
            LifeRule::parse_lists("3", "2,9"),
            Err(RuleError::OutOfRange { value: 9 })
        );
    }

    #[test]
    fn test_rule_notation_round_trip() {
        assert_eq!("B3/S23".parse::<LifeRule>(), Ok(LifeRule::conway()));
        assert_eq!("b36/s23".parse::<LifeRule>(), Ok(LifeRule::high_life()));
        assert_eq!("B2/S".parse::<LifeRule>(), Ok(LifeRule::seeds()));
        assert_eq!(LifeRule::day_and_night().to_string(), "B3678/S34678");
        assert_eq!(LifeRule::seeds().to_string(), "B2/S");
    }

    #[test]
    fn test_rule_notation_errors() {
        assert!(matches!("B3S23".parse::<LifeRule>(), Err(RuleError::Parse { .. })));
        assert!(matches!("S23/B3".parse::<LifeRule>(), Err(RuleError::Parse { .. })));
        assert_eq!(
            "B39/S23".parse::<LifeRule>(),
            Err(RuleError::OutOfRange { value: 9 })
        );
        assert_eq!(
            "B33/S23".parse::<LifeRule>(),
            Err(RuleError::Duplicate { value: 3 })
        );
    }

    #[test]
    fn test_rule_names_are_unique() {
        let names: Vec<_> = all_rules().iter().map(|(name, _)| *name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
