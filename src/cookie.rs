/// Returns the percent-decoded value of the first cookie called `name` in a
/// `document.cookie` style string.
///
/// Only cookies whose trimmed text begins with exactly `name=` match, so
/// `csrftoken` never matches `old_csrftoken`. Values that fail to decode are
/// returned as they appear in the cookie string.
pub fn cookie(cookies: &str, name: &str) -> Option<String> {
  let prefix = format!("{name}=");

  cookies
    .split(';')
    .map(str::trim)
    .find_map(|cookie| cookie.strip_prefix(&prefix))
    .map(|value| match urlencoding::decode(value) {
      Ok(decoded) => decoded.into_owned(),
      Err(_) => value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_named_cookie() {
    assert_eq!(
      cookie("a=1; csrftoken=XYZ; b=2", "csrftoken").as_deref(),
      Some("XYZ"),
    );
  }

  #[test]
  fn missing() {
    assert_eq!(cookie("a=1; b=2", "csrftoken"), None);
    assert_eq!(cookie("", "csrftoken"), None);
  }

  #[test]
  fn prefixed_names_do_not_match() {
    #[track_caller]
    fn case(cookies: &str, expected: Option<&str>) {
      assert_eq!(cookie(cookies, "csrftoken").as_deref(), expected);
    }

    case("old_csrftoken=bad", None);
    case("csrftoken2=bad", None);
    case("old_csrftoken=bad; csrftoken=good", Some("good"));
    case("csrftoken=first; csrftoken=second", Some("first"));
  }

  #[test]
  fn values_are_percent_decoded() {
    assert_eq!(
      cookie("session=x; csrftoken=a%20b%3D", "csrftoken").as_deref(),
      Some("a b="),
    );
  }

  #[test]
  fn undecodable_values_are_verbatim() {
    assert_eq!(cookie("csrftoken=%FF", "csrftoken").as_deref(), Some("%FF"));
  }

  #[test]
  fn empty_value() {
    assert_eq!(cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
  }
}
