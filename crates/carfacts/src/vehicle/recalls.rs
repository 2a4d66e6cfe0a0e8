use crate::datasets::{self, RecallCampaign};
use crate::lookup::{canonical_make, normalize};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A recall campaign affecting the queried vehicle, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct RecallNotice {
    pub launch_date: NaiveDate,
    pub concern: String,
    pub defect: String,
    pub remedy: String,
    pub build_start: Option<NaiveDate>,
    pub build_end: Option<NaiveDate>,
}

/// Filters the national recall list down to campaigns naming this make
/// and model. When a manufacture year is supplied, campaigns with a
/// build window must cover that year; campaigns without a window always
/// apply.
pub fn lookup(make: &str, model: &str, manufacture_year: Option<i32>) -> Vec<RecallNotice> {
    select(&datasets::shared().recalls, make, model, manufacture_year)
}

fn select(
    campaigns: &[RecallCampaign],
    make: &str,
    model: &str,
    manufacture_year: Option<i32>,
) -> Vec<RecallNotice> {
    let make = normalize(make);
    let model = normalize(model);
    if make.is_empty() || model.is_empty() {
        return Vec::new();
    }

    let alias = canonical_make(&make);
    let mut notices: Vec<RecallNotice> = campaigns
        .iter()
        .filter(|campaign| {
            campaign.make == make || alias.is_some_and(|canonical| campaign.make == canonical)
        })
        .filter(|campaign| affects_model(campaign, &model))
        .filter(|campaign| covers_year(campaign, manufacture_year))
        .map(|campaign| RecallNotice {
            launch_date: campaign.launch_date,
            concern: campaign.concern.clone(),
            defect: campaign.defect.clone(),
            remedy: campaign.remedy.clone(),
            build_start: campaign.build_start,
            build_end: campaign.build_end,
        })
        .collect();

    notices.sort_by(|a, b| b.launch_date.cmp(&a.launch_date));
    notices
}

fn affects_model(campaign: &RecallCampaign, model: &str) -> bool {
    campaign
        .models
        .iter()
        .any(|affected| affected.contains(model) || model.contains(affected.as_str()))
}

fn covers_year(campaign: &RecallCampaign, manufacture_year: Option<i32>) -> bool {
    let Some(year) = manufacture_year else {
        return true;
    };
    match (campaign.build_start, campaign.build_end) {
        (Some(start), Some(end)) => year >= start.year() && year <= end.year(),
        (Some(start), None) => year >= start.year(),
        (None, Some(end)) => year <= end.year(),
        (None, None) => true,
    }
}
