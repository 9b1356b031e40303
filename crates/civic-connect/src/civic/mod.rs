pub mod catalog;
pub mod geo;
pub mod representatives;

/// Query string as sent by the caller, repeated keys included.
pub type QueryParams = Vec<(String, String)>;

/// First value for `name`. Repeated parameters resolve to their first occurrence.
pub(crate) fn first_param(params: &[(String, String)], name: &str) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}
