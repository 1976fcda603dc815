//! Commands over a list and the events they produce.
//!
//! Front ends drive a [`ListState`] through [`Command::execute`] and react
//! to the returned [`ListEvent`]s instead of diffing state.

use crate::error::{CommandParseError, ValidationError};
use crate::item::{Item, ItemId};
use crate::list::ListState;

/// Commands that can be executed on a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an entry from explicit text
    AddItem {
        name: String,
        quantity: String,
        unit: String,
    },

    /// Add an entry from the list's form fields
    SubmitForm,

    /// Remove an item
    DeleteItem { id: ItemId },

    /// Flip an item's purchased flag
    TogglePurchased { id: ItemId },
}

/// A state change that happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    ItemAdded(Item),
    ItemDeleted(Item),
    PurchasedToggled { id: ItemId, purchased: bool },
    ValidationFailed(ValidationError),
}

impl ListEvent {
    /// Short status line for UI.
    pub fn describe(&self) -> String {
        match self {
            ListEvent::ItemAdded(item) => format!("Added {}", item.label()),
            ListEvent::ItemDeleted(item) => format!("Deleted {}", item.name),
            ListEvent::PurchasedToggled { id, purchased: true } => {
                format!("Item {} purchased", id)
            }
            ListEvent::PurchasedToggled { id, purchased: false } => {
                format!("Item {} restored", id)
            }
            ListEvent::ValidationFailed(err) => err.to_string(),
        }
    }
}

impl Command {
    /// Execute the command on the given state
    ///
    /// Deleting or toggling an unknown id yields no events.
    pub fn execute(self, state: &mut ListState) -> Vec<ListEvent> {
        match self {
            Command::AddItem {
                name,
                quantity,
                unit,
            } => vec![added_or_failed(state.add_item(&name, &quantity, &unit))],

            Command::SubmitForm => vec![added_or_failed(state.submit_form())],

            Command::DeleteItem { id } => state
                .delete_item(id)
                .map(ListEvent::ItemDeleted)
                .into_iter()
                .collect(),

            Command::TogglePurchased { id } => state
                .toggle_purchased(id)
                .map(|purchased| ListEvent::PurchasedToggled { id, purchased })
                .into_iter()
                .collect(),
        }
    }
}

fn added_or_failed(result: Result<Item, ValidationError>) -> ListEvent {
    match result {
        Ok(item) => ListEvent::ItemAdded(item),
        Err(err) => ListEvent::ValidationFailed(err),
    }
}

/// Parse a command line.
///
/// Syntax:
/// - `add <name> | <quantity> | <unit>`
/// - `toggle <id>` (or `t`)
/// - `delete <id>` (or `d`, `rm`)
///
/// # Examples
/// ```
/// use shoplist_core::{parse_command, Command, ItemId};
/// assert_eq!(
///     parse_command("toggle 3"),
///     Ok(Command::TogglePurchased { id: ItemId(3) })
/// );
/// assert!(parse_command("add Milk | 2 | liter").is_ok());
/// ```
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Err(CommandParseError::Empty),
        "add" | "a" => parse_add(rest),
        "toggle" | "t" => Ok(Command::TogglePurchased {
            id: parse_id(rest, "toggle <id>")?,
        }),
        "delete" | "d" | "rm" => Ok(Command::DeleteItem {
            id: parse_id(rest, "delete <id>")?,
        }),
        _ => Err(CommandParseError::Unknown(word.to_string())),
    }
}

const ADD_USAGE: &str = "add <name> | <quantity> | <unit>";

// Field text is passed through untrimmed so validation sees what was typed.
fn parse_add(rest: &str) -> Result<Command, CommandParseError> {
    let mut parts = rest.splitn(3, '|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(quantity), Some(unit)) => Ok(Command::AddItem {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }),
        _ => Err(CommandParseError::MissingArgument(ADD_USAGE)),
    }
}

fn parse_id(arg: &str, usage: &'static str) -> Result<ItemId, CommandParseError> {
    if arg.is_empty() {
        return Err(CommandParseError::MissingArgument(usage));
    }
    arg.trim_start_matches('#')
        .parse::<u64>()
        .map(ItemId)
        .map_err(|_| CommandParseError::InvalidId(arg.to_string()))
}
