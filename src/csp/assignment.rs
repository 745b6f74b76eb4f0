use serde::Serialize;

use crate::csp::model::{ColourId, ColouringModel, RegionId};

/// The colours bound so far, indexed by region.
///
/// Exactly one assignment exists per solve attempt. The solver mutates it in
/// place and restores it on every backtrack, so outside a running solve it
/// is always either fully consistent with the choices made or fully
/// unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    values: Vec<Option<ColourId>>,
}

impl Assignment {
    /// An assignment with every region unbound.
    pub fn unassigned(region_count: usize) -> Self {
        Self {
            values: vec![None; region_count],
        }
    }

    pub fn get(&self, region: RegionId) -> Option<ColourId> {
        self.values.get(region).copied().flatten()
    }

    pub fn bind(&mut self, region: RegionId, colour: ColourId) {
        self.values[region] = Some(colour);
    }

    pub fn clear(&mut self, region: RegionId) {
        self.values[region] = None;
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Number of regions this assignment covers (bound or not).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Region and colour names for rendering, in declaration order.
    pub fn to_named<'a>(&self, model: &'a ColouringModel) -> Vec<(&'a str, Option<&'a str>)> {
        model
            .regions()
            .iter()
            .enumerate()
            .map(|(region, name)| {
                let colour = self.get(region).map(|c| model.colours()[c].as_str());
                (name.as_str(), colour)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Assignment;
    use crate::problems::australia::australia;

    #[test]
    fn starts_fully_unbound() {
        let assignment = Assignment::unassigned(4);
        assert_eq!(assignment.len(), 4);
        assert!(!assignment.is_empty());
        assert!(!assignment.is_complete());
        assert_eq!(assignment.get(2), None);

        assert!(Assignment::unassigned(0).is_empty());
    }

    #[test]
    fn bind_and_clear_round_trip() {
        let mut assignment = Assignment::unassigned(3);
        assignment.bind(1, 2);
        assert_eq!(assignment.get(1), Some(2));

        assignment.clear(1);
        assert_eq!(assignment, Assignment::unassigned(3));
    }

    #[test]
    fn complete_once_every_region_is_bound() {
        let mut assignment = Assignment::unassigned(2);
        assignment.bind(0, 0);
        assert!(!assignment.is_complete());
        assignment.bind(1, 1);
        assert!(assignment.is_complete());
    }

    #[test]
    fn named_export_follows_declaration_order() {
        let model = australia();
        let mut assignment = Assignment::unassigned(model.region_count());
        assignment.bind(0, 0);

        let named = assignment.to_named(&model);
        assert_eq!(named[0], ("WA", Some("Red")));
        assert_eq!(named[1], ("NT", None));
    }
}
