use serde::Serialize;

use super::{ComponentTransform, TransformError};
use crate::model::{carries_uid, Component, SUMMARY, VCALENDAR};

/// An ordered list of transforms applied as one pass.
#[derive(Default)]
pub struct Pipeline<'a> {
    transforms: Vec<Box<dyn ComponentTransform + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { transforms: Vec::new() }
    }

    /// Appends a transform to the end of the pipeline.
    #[must_use]
    pub fn with(mut self, transform: impl ComponentTransform + 'a) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Number of transforms in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if the pipeline has no transforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Runs every transform on `component`, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing transform and returns its error unchanged.
    /// Edits made by earlier transforms are kept.
    pub fn apply(&self, component: &mut Component) -> Result<(), TransformError> {
        for transform in &self.transforms {
            transform.apply(component)?;
        }
        Ok(())
    }

    /// Runs the pipeline over the UID-bearing components of a calendar.
    ///
    /// For a `VCALENDAR` root every direct child of a UID-bearing kind is
    /// visited; a root that is itself of such a kind is visited directly.
    /// Anything else (`VTIMEZONE`, `VALARM`, unknown kinds) is skipped.
    /// Returns the number of components visited.
    ///
    /// # Errors
    ///
    /// Returns the first transform error; components visited before the
    /// failure keep their edits.
    pub fn apply_to_calendar(&self, root: &mut Component) -> Result<usize, TransformError> {
        if root.is(VCALENDAR) {
            let mut visited = 0;
            for child in root.components_mut().iter_mut().filter(|c| carries_uid(c.name())) {
                self.apply(child)?;
                visited += 1;
            }
            Ok(visited)
        } else if carries_uid(root.name()) {
            self.apply(root)?;
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

/// A UID-bearing component found without a `UID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingUid {
    /// Component kind, e.g. `VEVENT`.
    pub kind: String,
    /// Position among the calendar's children (0 for a bare component).
    pub index: usize,
    /// `SUMMARY` value, to help locate the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl MissingUid {
    fn of(component: &Component, index: usize) -> Self {
        Self {
            kind: component.name().to_string(),
            index,
            summary: component.property(SUMMARY).map(|p| p.value.clone()),
        }
    }
}

/// Lists the components [`Pipeline::apply_to_calendar`] would visit that
/// currently lack a `UID`.
#[must_use]
pub fn missing_uids(root: &Component) -> Vec<MissingUid> {
    if root.is(VCALENDAR) {
        root.components()
            .iter()
            .enumerate()
            .filter(|(_, c)| carries_uid(c.name()) && !c.has_uid())
            .map(|(i, c)| MissingUid::of(c, i))
            .collect()
    } else if carries_uid(root.name()) && !root.has_uid() {
        vec![MissingUid::of(root, 0)]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::SequentialUidGenerator;
    use crate::model::Property;
    use crate::transform::UidUpdate;

    struct AddCategory;

    impl ComponentTransform for AddCategory {
        fn apply(&self, component: &mut Component) -> Result<(), TransformError> {
            component.add_property(Property::new("CATEGORIES", "normalized"));
            Ok(())
        }
    }

    struct Reject;

    impl ComponentTransform for Reject {
        fn apply(&self, _component: &mut Component) -> Result<(), TransformError> {
            Err("rejected".into())
        }
    }

    fn calendar() -> Component {
        Component::new("VCALENDAR")
            .with_property(Property::new("VERSION", "2.0"))
            .with_component(Component::new("VTIMEZONE").with_property(Property::new("TZID", "UTC")))
            .with_component(
                Component::new("VEVENT")
                    .with_property(Property::new("UID", "existing-1"))
                    .with_property(Property::new("SUMMARY", "Meeting")),
            )
            .with_component(Component::new("VTODO").with_property(Property::new("SUMMARY", "Call")))
            .with_component(Component::new("VJOURNAL"))
    }

    #[test]
    fn fills_only_missing_uids_on_uid_bearing_children() {
        let gen = SequentialUidGenerator::new("n").unwrap();
        let pipeline = Pipeline::new().with(UidUpdate::new(&gen));
        let mut cal = calendar();

        let visited = pipeline.apply_to_calendar(&mut cal).unwrap();

        assert_eq!(visited, 3);
        let uids: Vec<Option<&str>> = cal.components().iter().map(Component::uid).collect();
        assert_eq!(uids, vec![None, Some("existing-1"), Some("n-1"), Some("n-2")]);
        assert!(!cal.has_uid());
        assert!(missing_uids(&cal).is_empty());
    }

    #[test]
    fn bare_component_root_is_visited() {
        let gen = SequentialUidGenerator::new("n").unwrap();
        let pipeline = Pipeline::new().with(UidUpdate::new(&gen));

        let mut event = Component::new("VEVENT");
        assert_eq!(pipeline.apply_to_calendar(&mut event).unwrap(), 1);
        assert_eq!(event.uid(), Some("n-1"));

        let mut alarm = Component::new("VALARM");
        assert_eq!(pipeline.apply_to_calendar(&mut alarm).unwrap(), 0);
        assert!(!alarm.has_uid());
    }

    #[test]
    fn transforms_run_in_order_and_stop_at_first_error() {
        let pipeline = Pipeline::new().with(AddCategory).with(Reject).with(AddCategory);
        assert_eq!(pipeline.len(), 3);
        let mut event = Component::new("VEVENT");

        let err = pipeline.apply(&mut event).unwrap_err();

        assert_eq!(err.to_string(), "rejected");
        assert_eq!(event.properties_named("CATEGORIES").count(), 1);
    }

    #[test]
    fn empty_pipeline_changes_nothing() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        let mut cal = calendar();
        assert_eq!(pipeline.apply_to_calendar(&mut cal).unwrap(), 3);
        assert_eq!(cal, calendar());
    }

    #[test]
    fn missing_uids_reports_kind_index_and_summary() {
        let missing = missing_uids(&calendar());
        assert_eq!(
            missing,
            vec![
                MissingUid { kind: "VTODO".into(), index: 2, summary: Some("Call".into()) },
                MissingUid { kind: "VJOURNAL".into(), index: 3, summary: None },
            ]
        );
        assert_eq!(missing_uids(&Component::new("VEVENT")).len(), 1);
        assert!(missing_uids(&Component::new("VTIMEZONE")).is_empty());
    }
}
