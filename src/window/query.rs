use url::form_urlencoded;

/// Encode the request parameters to carry over into page links.
///
/// Every pair named `page_param` is dropped. The result starts with `&` so it
/// can follow the page parameter in a link, and is empty when nothing is left.
pub fn query_fragment<I, K, V>(params: I, page_param: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut kept = 0;
    for (key, value) in params {
        if key.as_ref() == page_param {
            continue;
        }
        serializer.append_pair(key.as_ref(), value.as_ref());
        kept += 1;
    }

    if kept == 0 {
        return String::new();
    }
    format!("&{}", serializer.finish())
}
