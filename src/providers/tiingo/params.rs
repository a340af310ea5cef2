use crate::models::request_params::PriceHistoryRequest;

/// Builds the query pairs for the daily prices endpoint.
///
/// The request bounds are already in the `YYYY-MM-DD` form the API requires,
/// so they pass through verbatim.
pub fn construct_params(request: &PriceHistoryRequest) -> Vec<(String, String)> {
    vec![
        ("startDate".to_string(), request.start_date.clone()),
        ("endDate".to_string(), request.end_date.clone()),
    ]
}
