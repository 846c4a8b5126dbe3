use crate::models::endpoint::Endpoint;

/// Assembles the request URL for one resource query.
///
/// A resource path ending in `=` (the batched `/alpha?codes=` lookup) takes
/// the term verbatim; any other path gets `/term` unless the term is empty.
/// Filters are joined with the endpoint separator into a `fields=` parameter.
/// No percent-encoding happens here; reqwest encodes the URL when it parses it.
pub fn build_url(
    endpoint: &Endpoint,
    resource_path: &str,
    term: &str,
    filters: Option<&[&str]>,
) -> String {
    let mut url = format!("{}{}", endpoint.base_url, resource_path);

    if resource_path.ends_with('=') {
        url.push_str(term);
    } else if !term.is_empty() {
        url.push('/');
        url.push_str(term);
    }

    if let Some(filters) = filters.filter(|f| !f.is_empty()) {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str("fields=");
        url.push_str(&endpoint.join(filters));
    }

    url
}
