/// How the buyer reached the page.
///
/// Order notification e-mails link here with `?from=email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrivalContext {
    pub from_email: bool,
}

impl ArrivalContext {
    pub fn from_query(search: &str) -> Self {
        Self {
            from_email: query_param(search, "from").as_deref() == Some("email"),
        }
    }
}

/// First value of `name` in a form-encoded query string; other pairs are not inspected
fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
