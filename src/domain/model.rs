use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Qualitative directionality of a neurotransmitter level in a disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    SeverelyDecreased,
    Decreased,
    Neutral,
    Increased,
    SeverelyIncreased,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::SeverelyDecreased,
        Direction::Decreased,
        Direction::Neutral,
        Direction::Increased,
        Direction::SeverelyIncreased,
    ];

    /// Arrow glyph as rendered in the reference table.
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::SeverelyDecreased => "↓↓",
            Direction::Decreased => "↓",
            Direction::Neutral => "→",
            Direction::Increased => "↑",
            Direction::SeverelyIncreased => "↑↑",
        }
    }

    /// Long-form label shown in the legend.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::SeverelyDecreased => "Severely Decreased",
            Direction::Decreased => "Decreased",
            Direction::Neutral => "Neutral/Variable",
            Direction::Increased => "Increased",
            Direction::SeverelyIncreased => "Severely Increased",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// The ten neurotransmitters every disorder row covers, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neurotransmitter {
    Dopamine,
    Serotonin,
    Norepinephrine,
    Acetylcholine,
    #[serde(rename = "GABA")]
    Gaba,
    Glutamate,
    Glycine,
    #[serde(rename = "Substance P")]
    SubstanceP,
    Endorphins,
    #[serde(rename = "CGRP")]
    Cgrp,
}

impl Neurotransmitter {
    pub const ALL: [Neurotransmitter; 10] = [
        Neurotransmitter::Dopamine,
        Neurotransmitter::Serotonin,
        Neurotransmitter::Norepinephrine,
        Neurotransmitter::Acetylcholine,
        Neurotransmitter::Gaba,
        Neurotransmitter::Glutamate,
        Neurotransmitter::Glycine,
        Neurotransmitter::SubstanceP,
        Neurotransmitter::Endorphins,
        Neurotransmitter::Cgrp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Neurotransmitter::Dopamine => "Dopamine",
            Neurotransmitter::Serotonin => "Serotonin",
            Neurotransmitter::Norepinephrine => "Norepinephrine",
            Neurotransmitter::Acetylcholine => "Acetylcholine",
            Neurotransmitter::Gaba => "GABA",
            Neurotransmitter::Glutamate => "Glutamate",
            Neurotransmitter::Glycine => "Glycine",
            Neurotransmitter::SubstanceP => "Substance P",
            Neurotransmitter::Endorphins => "Endorphins",
            Neurotransmitter::Cgrp => "CGRP",
        }
    }
}

impl std::fmt::Display for Neurotransmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One disorder's complete mapping of neurotransmitter to directionality,
/// kept in table column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    entries: Vec<(Neurotransmitter, Direction)>,
}

impl Row {
    pub fn new(entries: Vec<(Neurotransmitter, Direction)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Neurotransmitter, Direction)] {
        &self.entries
    }

    pub fn get(&self, neurotransmitter: Neurotransmitter) -> Option<Direction> {
        self.entries
            .iter()
            .find(|(nt, _)| *nt == neurotransmitter)
            .map(|(_, dir)| *dir)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Neurotransmitter, Direction)> {
        self.entries.iter()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (nt, dir) in &self.entries {
            map.serialize_entry(nt.name(), dir.glyph())?;
        }
        map.end()
    }
}

/// Summary counts for one row: derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub increased: usize,
    pub decreased: usize,
    pub neutral: usize,
    /// Per-severity counts, indexed from severity -2 up to +2.
    pub buckets: [usize; 5],
}

impl SummaryStats {
    /// Count of entries at exactly the given severity.
    pub fn bucket_count(&self, severity: i8) -> Option<usize> {
        if (-2..=2).contains(&severity) {
            Some(self.buckets[(severity + 2) as usize])
        } else {
            None
        }
    }

    pub fn total(&self) -> usize {
        self.increased + self.decreased + self.neutral
    }
}
