//! Embedded reference datasets, parsed once into immutable tables.
//!
//! Every dataset ships inside the binary; nothing is fetched or mutated
//! at runtime. Keyed datasets are JSON arrays so insertion order survives
//! into the fuzzy scan; the recall campaign list mirrors the CSV layout
//! the DVSA distributes.

use crate::lookup::{composite_key, normalize, LookupTable, SuppressedKeys};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

static DATASETS: OnceLock<Datasets> = OnceLock::new();

/// Process-wide reference tables. Obtain via [`init`] or [`shared`].
pub struct Datasets {
    pub rarity: LookupTable<RarityRecord>,
    pub theft: LookupTable<TheftRecord>,
    pub mot_pass_rates: LookupTable<PassRateRecord>,
    pub tyre_sizes: LookupTable<TyreSizeRecord>,
    pub dimensions: LookupTable<DimensionsRecord>,
    pub ev_specs: LookupTable<EvSpecRecord>,
    pub body_types: LookupTable<BodyTypeRecord>,
    pub ambiguous_bodies: SuppressedKeys,
    pub colour_popularity: LookupTable<ColourRecord>,
    pub fuel_economy: Vec<FuelEconomyEntry>,
    pub recalls: Vec<RecallCampaign>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("malformed {name} dataset: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed recall dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("recall row {row}: invalid {field} date '{value}'")]
    RecallDate {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Parses every embedded dataset eagerly, surfacing the first malformed
/// asset. Call once at startup so a bad data drop fails fast instead of
/// panicking on first lookup.
pub fn init() -> Result<&'static Datasets, DatasetError> {
    if let Some(datasets) = DATASETS.get() {
        return Ok(datasets);
    }
    let loaded = load()?;
    Ok(DATASETS.get_or_init(|| loaded))
}

/// The process-wide tables, loading them on first use.
pub fn shared() -> &'static Datasets {
    DATASETS.get_or_init(|| load().expect("embedded reference data is well formed"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RarityRecord {
    pub licensed: u32,
    pub sorn: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TheftRecord {
    pub thefts: u32,
    pub registered: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PassRateRecord {
    pub pass_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TyreSizeRecord {
    pub front: String,
    pub rear: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DimensionsRecord {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
    pub boot_litres: Option<u32>,
    pub kerb_weight_kg: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvSpecRecord {
    pub battery_kwh: f64,
    pub range_miles: u32,
    pub max_charge_kw: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyTypeRecord {
    pub body_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColourRecord {
    pub colour: String,
    pub rank: u8,
}

/// One engine variant in the fuel economy dataset. Make, model, and fuel
/// are stored normalized so the adapter's tiered match compares directly.
#[derive(Debug, Clone)]
pub struct FuelEconomyEntry {
    pub make: String,
    pub model: String,
    pub engine_cc: u32,
    pub fuel_type: String,
    pub combined_mpg: f64,
}

/// One safety recall campaign. Models are stored normalized; the build
/// window is optional because some campaigns apply regardless of build
/// date.
#[derive(Debug, Clone)]
pub struct RecallCampaign {
    pub make: String,
    pub models: Vec<String>,
    pub launch_date: NaiveDate,
    pub concern: String,
    pub defect: String,
    pub remedy: String,
    pub build_start: Option<NaiveDate>,
    pub build_end: Option<NaiveDate>,
}

fn load() -> Result<Datasets, DatasetError> {
    let body_file: BodyTypeFile = serde_json::from_str(include_str!("../../data/body_types.json"))
        .map_err(|source| DatasetError::Json {
            name: "body type",
            source,
        })?;

    let mut body_types = LookupTable::new();
    for row in body_file.entries {
        body_types.insert(&row.make, &row.model, row.value);
    }
    let ambiguous_bodies = body_file
        .ambiguous
        .iter()
        .map(|entry| composite_key(&normalize(&entry.make), &normalize(&entry.model)))
        .collect();

    Ok(Datasets {
        rarity: load_table("rarity", include_str!("../../data/rarity.json"))?,
        theft: load_table("theft", include_str!("../../data/theft.json"))?,
        mot_pass_rates: load_table(
            "MOT pass rate",
            include_str!("../../data/mot_pass_rates.json"),
        )?,
        tyre_sizes: load_table("tyre size", include_str!("../../data/tyre_sizes.json"))?,
        dimensions: load_table("dimensions", include_str!("../../data/dimensions.json"))?,
        ev_specs: load_table("EV spec", include_str!("../../data/ev_specs.json"))?,
        body_types,
        ambiguous_bodies,
        colour_popularity: load_table(
            "colour popularity",
            include_str!("../../data/colour_popularity.json"),
        )?,
        fuel_economy: load_fuel_economy(include_str!("../../data/fuel_economy.json"))?,
        recalls: load_recalls(include_str!("../../data/recalls.csv"))?,
    })
}

#[derive(Debug, Deserialize)]
struct KeyedRow<T> {
    make: String,
    model: String,
    #[serde(flatten)]
    value: T,
}

#[derive(Debug, Deserialize)]
struct BodyTypeFile {
    entries: Vec<KeyedRow<BodyTypeRecord>>,
    ambiguous: Vec<ModelRef>,
}

#[derive(Debug, Deserialize)]
struct ModelRef {
    make: String,
    model: String,
}

fn load_table<T: DeserializeOwned>(
    name: &'static str,
    raw: &str,
) -> Result<LookupTable<T>, DatasetError> {
    let rows: Vec<KeyedRow<T>> =
        serde_json::from_str(raw).map_err(|source| DatasetError::Json { name, source })?;
    let mut table = LookupTable::new();
    for row in rows {
        table.insert(&row.make, &row.model, row.value);
    }
    Ok(table)
}

#[derive(Debug, Deserialize)]
struct FuelEconomyRow {
    make: String,
    model: String,
    engine_cc: u32,
    fuel_type: String,
    combined_mpg: f64,
}

fn load_fuel_economy(raw: &str) -> Result<Vec<FuelEconomyEntry>, DatasetError> {
    let rows: Vec<FuelEconomyRow> =
        serde_json::from_str(raw).map_err(|source| DatasetError::Json {
            name: "fuel economy",
            source,
        })?;

    Ok(rows
        .into_iter()
        .map(|row| FuelEconomyEntry {
            make: normalize(&row.make),
            model: normalize(&row.model),
            engine_cc: row.engine_cc,
            fuel_type: normalize(&row.fuel_type),
            combined_mpg: row.combined_mpg,
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct RecallRow {
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Models")]
    models: String,
    #[serde(rename = "Launch Date")]
    launch_date: String,
    #[serde(rename = "Concern")]
    concern: String,
    #[serde(rename = "Defect")]
    defect: String,
    #[serde(rename = "Remedy")]
    remedy: String,
    #[serde(rename = "Build Start", default, deserialize_with = "empty_string_as_none")]
    build_start: Option<String>,
    #[serde(rename = "Build End", default, deserialize_with = "empty_string_as_none")]
    build_end: Option<String>,
}

fn load_recalls(raw: &str) -> Result<Vec<RecallCampaign>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    let mut campaigns = Vec::new();

    for (row_number, record) in reader.deserialize::<RecallRow>().enumerate() {
        let row = record?;
        let launch_date = parse_recall_date(row_number, "launch", &row.launch_date)?;
        let build_start = row
            .build_start
            .map(|value| parse_recall_date(row_number, "build start", &value))
            .transpose()?;
        let build_end = row
            .build_end
            .map(|value| parse_recall_date(row_number, "build end", &value))
            .transpose()?;

        campaigns.push(RecallCampaign {
            make: normalize(&row.make),
            models: row
                .models
                .split(';')
                .map(normalize)
                .filter(|model| !model.is_empty())
                .collect(),
            launch_date,
            concern: row.concern,
            defect: row.defect,
            remedy: row.remedy,
            build_start,
            build_end,
        });
    }

    Ok(campaigns)
}

fn parse_recall_date(
    row: usize,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, DatasetError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DatasetError::RecallDate {
        row,
        field,
        value: value.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
