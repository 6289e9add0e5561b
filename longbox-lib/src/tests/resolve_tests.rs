use super::*;

/// Fails the test if consulted.
struct NeverAsk;

impl UserChoice for NeverAsk {
    fn select(&mut self, prompt: &str, _options: &[String]) -> Result<usize, ChoiceError> {
        panic!("unexpected menu: {prompt}");
    }

    fn text(&mut self, prompt: &str, _default: Option<&str>) -> Result<String, ChoiceError> {
        panic!("unexpected prompt: {prompt}");
    }

    fn pause(&mut self, message: &str) -> Result<(), ChoiceError> {
        panic!("unexpected pause: {message}");
    }
}

/// Picks a fixed index and records the menus it saw.
struct Pick {
    index: usize,
    menus: Vec<Vec<String>>,
}

impl UserChoice for Pick {
    fn select(&mut self, _prompt: &str, options: &[String]) -> Result<usize, ChoiceError> {
        self.menus.push(options.to_vec());
        Ok(self.index)
    }

    fn text(&mut self, _prompt: &str, _default: Option<&str>) -> Result<String, ChoiceError> {
        Ok(String::new())
    }

    fn pause(&mut self, _message: &str) -> Result<(), ChoiceError> {
        Ok(())
    }
}

fn candidates(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(s, v)| (s.to_string(), v.to_string()))
        .collect()
}

#[test]
fn no_candidates_resolve_to_none() {
    let policy = ResolutionPolicy::default();
    let none: Vec<(String, String)> = Vec::new();
    assert_eq!(resolve("Series Title", &none, &policy, &mut NeverAsk).unwrap(), None);
}

#[test]
fn equal_candidates_never_ask() {
    let policy = ResolutionPolicy::new(Vec::new(), true);
    let values = candidates(&[("Metron", "Batman"), ("Comicvine", "Batman")]);
    assert_eq!(
        resolve("Series Title", &values, &policy, &mut NeverAsk).unwrap(),
        Some("Batman".to_string())
    );
}

#[test]
fn precedence_picks_first_listed_source() {
    let policy = ResolutionPolicy::new(vec!["Comicvine".into(), "Metron".into()], false);
    let values = candidates(&[("Metron", "A"), ("Comicvine", "B")]);
    assert_eq!(
        resolve("Issue Title", &values, &policy, &mut NeverAsk).unwrap(),
        Some("B".to_string())
    );
}

#[test]
fn precedence_names_match_loosely() {
    let policy = ResolutionPolicy::new(vec!["grand_comics_database".into()], false);
    let values = candidates(&[("Metron", "A"), ("Grand Comics Database", "B")]);
    assert_eq!(
        resolve("Issue Title", &values, &policy, &mut NeverAsk).unwrap(),
        Some("B".to_string())
    );
}

#[test]
fn unlisted_sources_fall_through_to_the_user() {
    let policy = ResolutionPolicy::new(vec!["Marvel".into()], false);
    let values = candidates(&[("Metron", "A"), ("Comicvine", "B")]);
    let mut pick = Pick {
        index: 0,
        menus: Vec::new(),
    };
    assert_eq!(
        resolve("Issue Title", &values, &policy, &mut pick).unwrap(),
        Some("A".to_string())
    );
    assert_eq!(pick.menus, vec![vec!["Metron - A".to_string(), "Comicvine - B".to_string()]]);
}

#[test]
fn interactive_ignores_precedence() {
    let policy = ResolutionPolicy::new(vec!["Comicvine".into()], true);
    let values = candidates(&[("Metron", "A"), ("Comicvine", "B")]);
    let mut pick = Pick {
        index: 0,
        menus: Vec::new(),
    };
    assert_eq!(
        resolve("Issue Title", &values, &policy, &mut pick).unwrap(),
        Some("A".to_string())
    );
    assert_eq!(pick.menus.len(), 1);
}

#[test]
fn out_of_range_selection_is_an_error() {
    let policy = ResolutionPolicy::default();
    let values = candidates(&[("Metron", "A"), ("Comicvine", "B")]);
    let mut pick = Pick {
        index: 5,
        menus: Vec::new(),
    };
    assert!(matches!(
        resolve("Issue Title", &values, &policy, &mut pick),
        Err(ChoiceError::OutOfRange { index: 5, .. })
    ));
}

#[test]
fn works_for_non_string_values() {
    let policy = ResolutionPolicy::new(vec!["Metron".into()], false);
    let values = vec![("Comicvine".to_string(), 2u32), ("Metron".to_string(), 3u32)];
    assert_eq!(resolve("Series Volume", &values, &policy, &mut NeverAsk).unwrap(), Some(3));
}

#[test]
fn rank_uses_loose_names() {
    let policy = ResolutionPolicy::new(vec!["metron".into(), "Comic Vine".into()], false);
    assert_eq!(policy.rank("Metron"), Some(0));
    assert_eq!(policy.rank("comicvine"), Some(1));
    assert_eq!(policy.rank("Marvel"), None);
}
