//! In-memory list state and its transitions.

use tracing::debug;

use crate::error::ValidationError;
use crate::item::{Item, ItemId};
use crate::summary::{Progress, Summary};
use crate::validation::validate_entry;

/// Raw text of the three entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl EntryForm {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Get the text of a field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Quantity => &self.quantity,
            FormField::Unit => &self.unit,
        }
    }

    /// Get mutable access to the text of a field.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Quantity => &mut self.quantity,
            FormField::Unit => &mut self.unit,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.unit.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty() && self.unit.is_empty()
    }
}

/// One of the three entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
    Unit,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Quantity, FormField::Unit];

    /// Field label for UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
            Self::Unit => "Unit",
        }
    }

    /// The following field, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Unit,
            Self::Unit => Self::Name,
        }
    }

    /// The preceding field, wrapping around.
    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Unit,
            Self::Quantity => Self::Name,
            Self::Unit => Self::Quantity,
        }
    }
}

/// The whole state of one shopping list session.
///
/// Only built empty through [`ListState::new`]; every later state comes
/// from the transition methods, which keep ids unique and increasing and
/// names unique ignoring case.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    next_id: ItemId,
    form: EntryForm,
    error: Option<ValidationError>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::FIRST,
            form: EntryForm::default(),
            error: None,
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next successful add will use.
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of an item in the list.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// The last validation failure, cleared by the next successful add.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// User-facing text for the last validation failure.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.form.name = text.into();
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.form.quantity = text.into();
    }

    pub fn set_unit(&mut self, text: impl Into<String>) {
        self.form.unit = text.into();
    }

    /// Validate and append a new item.
    ///
    /// On success the entry form and error are cleared. On failure the
    /// items, id counter and form are left as they were and the error is
    /// recorded.
    pub fn add_item(&mut self, name: &str, quantity: &str, unit: &str) -> Result<Item, ValidationError> {
        let checked = validate_entry(name, quantity, unit, &self.items).and_then(|entry| {
            let following = self.next_id.next().ok_or(ValidationError::IdsExhausted)?;
            Ok((entry, following))
        });
        let (entry, following) = match checked {
            Ok(checked) => checked,
            Err(err) => {
                debug!(code = err.code(), "entry rejected");
                self.error = Some(err);
                return Err(err);
            }
        };

        let item = Item::new(self.next_id, entry.name, entry.quantity, entry.unit);
        self.items.push(item.clone());
        self.next_id = following;
        self.form.clear();
        self.error = None;

        debug!(id = %item.id, name = %item.name, "item added");
        Ok(item)
    }

    /// Add an item from the current form text.
    pub fn submit_form(&mut self) -> Result<Item, ValidationError> {
        let EntryForm { name, quantity, unit } = self.form.clone();
        self.add_item(&name, &quantity, &unit)
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        let item = self.items.remove(index);
        debug!(id = %id, "item deleted");
        Some(item)
    }

    /// Flip the purchased flag. Unknown ids are ignored.
    ///
    /// Returns the new flag value when the item exists.
    pub fn toggle_purchased(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.purchased = !item.purchased;
        debug!(id = %id, purchased = item.purchased, "purchased toggled");
        Some(item.purchased)
    }

    /// Summary over the current items.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.items)
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListState {
        let mut list = ListState::new();
        list.add_item("Milk", "2", "liter").unwrap();
        list.add_item("Bread", "1", "loaf").unwrap();
        list.add_item("Eggs", "12", "pcs").unwrap();
        list
    }

    fn names(list: &ListState) -> Vec<&str> {
        list.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn first_item_gets_id_one() {
        let mut list = ListState::new();
        let item = list.add_item("Milk", "2", "liter").unwrap();
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit, "liter");
        assert!(!item.purchased);
        assert_eq!(list.next_id(), ItemId(2));
    }

    #[test]
    fn failed_add_records_error_and_keeps_form() {
        let mut list = ListState::new();
        list.set_name("Eggs");
        list.set_quantity("-3");
        list.set_unit("dozen");

        assert_eq!(list.submit_form(), Err(ValidationError::InvalidQuantity));
        assert!(list.is_empty());
        assert_eq!(list.next_id(), ItemId(1));
        assert_eq!(list.error(), Some(ValidationError::InvalidQuantity));
        assert_eq!(list.form(), &EntryForm::new("Eggs", "-3", "dozen"));
    }

    #[test]
    fn success_clears_form_and_error() {
        let mut list = ListState::new();
        list.set_quantity("1");
        assert!(list.submit_form().is_err());
        assert!(list.error_message().is_some());

        list.set_name("Bread");
        list.set_unit("loaf");
        list.submit_form().unwrap();

        assert!(list.form().is_blank());
        assert_eq!(list.error(), None);
    }

    #[test]
    fn delete_preserves_order() {
        let mut list = sample();
        let removed = list.delete_item(ItemId(2)).unwrap();
        assert_eq!(removed.name, "Bread");
        assert_eq!(names(&list), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut list = sample();
        let _ = list.add_item("milk", "1", "liter");
        let before = list.clone();

        assert_eq!(list.delete_item(ItemId(99)), None);
        assert_eq!(list, before);
        assert_eq!(list.error(), Some(ValidationError::DuplicateItem));
    }

    #[test]
    fn ids_not_reused_after_delete() {
        let mut list = sample();
        list.delete_item(ItemId(3));
        let item = list.add_item("Butter", "250", "g").unwrap();
        assert_eq!(item.id, ItemId(4));
    }

    #[test]
    fn deleted_name_can_be_added_again() {
        let mut list = sample();
        list.delete_item(ItemId(1));
        assert!(list.add_item("MILK", "1", "liter").is_ok());
    }

    #[test]
    fn toggle_twice_restores() {
        let mut list = sample();
        assert_eq!(list.toggle_purchased(ItemId(2)), Some(true));
        assert!(list.get(ItemId(2)).unwrap().purchased);
        assert_eq!(list.toggle_purchased(ItemId(2)), Some(false));
        assert!(!list.get(ItemId(2)).unwrap().purchased);
        assert_eq!(names(&list), vec!["Milk", "Bread", "Eggs"]);
    }

    #[test]
    fn toggle_unknown_is_noop() {
        let mut list = sample();
        let before = list.clone();
        assert_eq!(list.toggle_purchased(ItemId(0)), None);
        assert_eq!(list, before);
    }

    #[test]
    fn summary_follows_toggles() {
        let mut list = ListState::new();
        assert_eq!(list.summary(), Summary::Empty);

        list.add_item("Milk", "2", "liter").unwrap();
        list.add_item("Bread", "1", "loaf").unwrap();
        list.toggle_purchased(ItemId(1));
        assert_eq!(list.summary(), Summary::Remaining(1));

        list.toggle_purchased(ItemId(2));
        assert_eq!(list.summary(), Summary::AllPurchased);
        assert_eq!(list.progress().purchased, 2);
    }

    #[test]
    fn exhausted_ids_reject_without_panicking() {
        let mut list = sample();
        list.next_id = ItemId(u64::MAX);
        let before = list.clone();

        assert_eq!(
            list.add_item("Butter", "250", "g"),
            Err(ValidationError::IdsExhausted)
        );
        assert_eq!(list.items(), before.items());
        assert_eq!(list.next_id(), ItemId(u64::MAX));
        assert_eq!(list.error(), Some(ValidationError::IdsExhausted));
    }

    #[test]
    fn form_field_cycle() {
        let mut field = FormField::Name;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Unit);

        let mut form = EntryForm::default();
        form.field_mut(FormField::Unit).push_str("kg");
        assert_eq!(form.field(FormField::Unit), "kg");
    }
}
