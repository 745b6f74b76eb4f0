//! The classic Australia map-colouring instance.

use crate::csp::model::ColouringModel;

/// Seven regions, three colours. Tasmania has no land borders, so it is
/// unconstrained and takes whatever colour comes first.
pub fn australia() -> ColouringModel {
    let regions = ["WA", "NT", "SA", "Q", "NSW", "V", "T"]
        .map(String::from)
        .to_vec();
    let colours = ["Red", "Green", "Blue"].map(String::from).to_vec();
    let borders = [
        ("WA", "NT"),
        ("WA", "SA"),
        ("NT", "SA"),
        ("NT", "Q"),
        ("SA", "Q"),
        ("SA", "NSW"),
        ("SA", "V"),
        ("Q", "NSW"),
        ("NSW", "V"),
    ]
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .to_vec();

    ColouringModel::new(regions, colours, borders).expect("the built-in map is well formed")
}
