use std::sync::OnceLock;

use crate::domain::model::{Direction, Neurotransmitter, Row};
use crate::domain::ports::DatasetProvider;
use crate::utils::error::{AtlasError, Result};

/// One curated disorder: name, sidebar description, and its directionality row.
#[derive(Debug, Clone)]
pub struct DisorderRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub row: Row,
}

/// The compiled-in reference table. Built once, read-only thereafter; there is
/// deliberately no mutation API because this is curated reference data.
pub struct StaticDataset {
    records: Vec<DisorderRecord>,
}

// Directionality per disorder, sourced from peer-reviewed summaries.
// Column order is Neurotransmitter::ALL order.
const TABLE: [(&str, &str, [Direction; 10]); 11] = {
    use Direction::{
        Decreased as D, Increased as U, Neutral as N, SeverelyDecreased as DD,
    };
    [
        (
            "Major Depression",
            "Characterized by persistent sadness, loss of interest, and cognitive impairments.",
            [D, D, D, N, D, U, N, U, D, N],
        ),
        (
            "Bipolar Disorder (Mania)",
            "Periods of elevated mood, increased energy, and impulsive behavior.",
            [U, D, U, N, D, U, N, N, N, N],
        ),
        (
            "Bipolar Disorder (Depression)",
            "Depressive episodes alternating with manic periods.",
            [D, D, D, N, D, N, N, N, D, N],
        ),
        (
            "Schizophrenia",
            "A mental disorder characterized by disruptions in thought processes and perceptions.",
            [U, N, N, N, D, U, N, N, N, N],
        ),
        (
            "Anxiety Disorders",
            "Excessive fear or anxiety that interferes with daily activities.",
            [N, D, U, N, D, U, N, U, D, U],
        ),
        (
            "ADHD",
            "Persistent pattern of inattention and/or hyperactivity-impulsivity.",
            [D, D, D, N, N, N, N, N, N, N],
        ),
        (
            "Parkinson's Disease",
            "Progressive nervous system disorder affecting movement.",
            [DD, N, D, U, N, N, N, D, D, N],
        ),
        (
            "Alzheimer's Disease",
            "Progressive brain disorder that affects memory and thinking skills.",
            [N, N, N, D, N, U, N, D, D, N],
        ),
        (
            "Autism Spectrum",
            "Developmental disorder affecting communication and behavior.",
            [N, U, N, N, D, U, N, N, N, N],
        ),
        (
            "Seizure Disorders",
            "Conditions characterized by recurrent seizures.",
            [N, N, N, N, D, U, N, N, N, N],
        ),
        (
            "Huntington Disease",
            "Inherited disease causing progressive breakdown of nerve cells.",
            [D, N, N, N, D, U, N, N, N, N],
        ),
    ]
};

impl StaticDataset {
    pub fn new() -> Self {
        let records = TABLE
            .into_iter()
            .map(|(name, description, directions)| DisorderRecord {
                name,
                description,
                row: Row::new(
                    Neurotransmitter::ALL
                        .iter()
                        .copied()
                        .zip(directions.iter().copied())
                        .collect(),
                ),
            })
            .collect();
        Self { records }
    }

    fn find(&self, name: &str) -> Result<&DisorderRecord> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| AtlasError::DisorderNotFound {
                name: name.to_string(),
            })
    }

    pub fn records(&self) -> &[DisorderRecord] {
        &self.records
    }
}

impl Default for StaticDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetProvider for StaticDataset {
    fn list_disorders(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name).collect()
    }

    fn get_row(&self, name: &str) -> Result<&Row> {
        self.find(name).map(|record| &record.row)
    }

    fn description(&self, name: &str) -> Result<&str> {
        self.find(name).map(|record| record.description)
    }
}

/// Process-wide dataset instance, initialized on first use.
pub fn builtin() -> &'static StaticDataset {
    static DATASET: OnceLock<StaticDataset> = OnceLock::new();
    DATASET.get_or_init(StaticDataset::new)
}
