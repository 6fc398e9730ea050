use chrono::NaiveDate;
use hibp_client::model::BreachEntry;

/// Create a breach entry as the breach API would return it.
///
/// # Arguments
/// - `name` - Upstream breach name, also used as title and for the domain
/// - `breach_date` - Breach date as `YYYY-MM-DD`
///
/// # Returns
/// - `BreachEntry` - A fully populated entry with test data
pub fn mock_breach_entry(name: &str, breach_date: &str) -> BreachEntry {
    BreachEntry {
        name: name.to_string(),
        title: name.to_string(),
        domain: format!("{}.com", name.to_lowercase()),
        breach_date: Some(breach_date.to_string()),
        modified_date: Some("2022-05-15T23:52:49Z".to_string()),
        description: Some(format!("<p>{} was breached.</p>", name)),
        logo_path: Some(format!(
            "https://haveibeenpwned.com/Content/Images/PwnedLogos/{}.png",
            name
        )),
        pwn_count: 1000,
        data_classes: vec!["Email addresses".to_string(), "Passwords".to_string()],
    }
}

/// Parse a `YYYY-MM-DD` test date.
///
/// # Panics
/// Panics if `date` is not a valid date
pub fn breach_date(date: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
}
