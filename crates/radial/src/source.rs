use crate::error::MenuError;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub icon: Option<IconName>,
    pub label: Option<Label>,
}

impl MenuItem {
    pub fn new(icon: Option<IconName>, label: Option<Label>) -> Self {
        Self { icon, label }
    }
}

/// Which widgets a host builds for each item.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ItemTemplate {
    #[default]
    #[strum(to_string = "icon-label", serialize = "default")]
    IconLabel,
    #[strum(to_string = "icon-only", serialize = "icon")]
    IconOnly,
    #[strum(to_string = "label-only", serialize = "label")]
    LabelOnly,
}

/// Ordered items backing a menu.
pub trait ItemSource {
    fn count(&self) -> usize;

    /// `None` when `index >= self.count()`.
    fn item_at(&self, index: usize) -> Option<MenuItem>;

    fn items(&self) -> Vec<MenuItem> {
        (0..self.count()).filter_map(|i| self.item_at(i)).collect()
    }
}

impl ItemSource for Vec<MenuItem> {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, index: usize) -> Option<MenuItem> {
        self.get(index).cloned()
    }
}

/// Parallel icon and label arrays. When both are present the shorter one
/// decides the item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySource {
    icons: Option<Vec<IconName>>,
    labels: Option<Vec<Label>>,
    count: usize,
}

impl ArraySource {
    pub fn new(
        icons: Option<Vec<IconName>>,
        labels: Option<Vec<Label>>,
    ) -> Result<Self, MenuError> {
        let count = match (&icons, &labels) {
            (None, None) => return Err(MenuError::MissingItems),
            (Some(icons), None) => icons.len(),
            (None, Some(labels)) => labels.len(),
            (Some(icons), Some(labels)) => icons.len().min(labels.len()),
        };

        Ok(Self {
            icons,
            labels,
            count,
        })
    }
}

impl ItemSource for ArraySource {
    fn count(&self) -> usize {
        self.count
    }

    fn item_at(&self, index: usize) -> Option<MenuItem> {
        if index >= self.count {
            return None;
        }
        let icon = self.icons.as_ref().and_then(|v| v.get(index)).cloned();
        let label = self.labels.as_ref().and_then(|v| v.get(index)).cloned();
        Some(MenuItem::new(icon, label))
    }
}

/// Adapter over a closure, for items computed on demand.
pub struct FnSource<F> {
    count: usize,
    item: F,
}

impl<F> FnSource<F>
where
    F: Fn(usize) -> MenuItem,
{
    pub fn new(count: usize, item: F) -> Self {
        Self { count, item }
    }
}

impl<F> ItemSource for FnSource<F>
where
    F: Fn(usize) -> MenuItem,
{
    fn count(&self) -> usize {
        self.count
    }

    fn item_at(&self, index: usize) -> Option<MenuItem> {
        (index < self.count).then(|| (self.item)(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(n: usize) -> Vec<IconName> {
        (0..n).map(|i| IconName::new(format!("icon-{i}"))).collect()
    }

    fn labels(n: usize) -> Vec<Label> {
        (0..n).map(|i| Label::new(format!("label-{i}"))).collect()
    }

    #[test]
    fn test_shorter_array_decides_count() {
        let source = ArraySource::new(Some(icons(6)), Some(labels(4))).unwrap();
        assert_eq!(source.count(), 4);
        assert_eq!(source.item_at(4), None);
        assert_eq!(
            source.item_at(3),
            Some(MenuItem::new(
                Some(IconName::from("icon-3")),
                Some(Label::from("label-3"))
            ))
        );
    }

    #[test]
    fn test_missing_arrays_are_rejected() {
        assert_eq!(ArraySource::new(None, None), Err(MenuError::MissingItems));
    }

    #[test]
    fn test_single_array_is_enough() {
        let only_icons = ArraySource::new(Some(icons(5)), None).unwrap();
        assert_eq!(only_icons.count(), 5);
        assert_eq!(only_icons.item_at(0).unwrap().label, None);

        let only_labels = ArraySource::new(None, Some(labels(3))).unwrap();
        assert_eq!(only_labels.count(), 3);
        assert_eq!(only_labels.item_at(2).unwrap().icon, None);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let source = ArraySource::new(Some(Vec::new()), None).unwrap();
        assert_eq!(source.count(), 0);
        assert!(source.items().is_empty());
    }

    #[test]
    fn test_fn_source_stops_at_count() {
        let source = FnSource::new(3, |i| MenuItem::new(None, Some(Label::new(i.to_string()))));
        let labels: Vec<_> = source
            .items()
            .into_iter()
            .filter_map(|item| item.label)
            .collect();
        assert_eq!(labels, vec![Label::from("0"), Label::from("1"), Label::from("2")]);
        assert_eq!(source.item_at(3), None);
    }

    #[test]
    fn test_template_deserialization() {
        let cases = vec![
            ("\"icon-label\"", ItemTemplate::IconLabel),
            ("\"Icon-Label\"", ItemTemplate::IconLabel),
            ("\"default\"", ItemTemplate::IconLabel),
            ("\"icon-only\"", ItemTemplate::IconOnly),
            ("\"ICON\"", ItemTemplate::IconOnly),
            ("\"label\"", ItemTemplate::LabelOnly),
        ];

        for (json, expected) in cases {
            let deserialized: ItemTemplate = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<ItemTemplate>("\"grid\"").is_err());
    }
}
