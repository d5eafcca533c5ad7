//! Interactive terminal shell.
//!
//! This is the only module that reads operator input or prints. Every prompt,
//! re-prompt, and parse lives here; the registry only ever receives validated
//! values (a table number, a parsed item batch, a packaging boolean). Domain
//! errors coming back from the registry are printed and the loop continues.

use crate::core::registry::TABLE_COUNT;
use crate::core::{Cafe, report};
use crate::errors::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One comma-separated token of operator item input: a name with an optional
/// quantity. A missing or unparseable quantity is resolved by prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemToken {
    /// Lower-cased item name.
    pub name: String,
    /// Quantity, if one was given and parsed.
    pub quantity: Option<u32>,
}

/// Parses a comma-separated `name [quantity]` list.
///
/// Empty tokens are dropped. A second word that does not parse as a number
/// leaves the quantity unset so the caller can ask for it. Pure.
#[must_use]
pub fn parse_item_tokens(input: &str) -> Vec<ItemToken> {
    input
        .split(',')
        .filter_map(|token| {
            let mut parts = token.split_whitespace();
            let name = parts.next()?.to_lowercase();
            let quantity = parts.next().and_then(|raw| raw.parse().ok());
            Some(ItemToken { name, quantity })
        })
        .collect()
}

/// Reads one line, treating Ctrl-C/Ctrl-D as "no input" (exit signal).
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Prompts once for a number; a malformed entry aborts the operation.
fn prompt_number(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<u32>> {
    let Some(line) = read_line(rl, prompt)? else {
        return Ok(None);
    };
    match line.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid input. Please enter a valid number.");
            Ok(None)
        }
    }
}

/// Prompts until the operator answers yes or no.
fn prompt_yes_no(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<bool>> {
    loop {
        let Some(line) = read_line(rl, prompt)? else {
            return Ok(None);
        };
        match line.to_lowercase().as_str() {
            "yes" => return Ok(Some(true)),
            "no" => return Ok(Some(false)),
            _ => println!("Invalid input. Please enter 'yes' or 'no'."),
        }
    }
}

/// Fills in missing quantities by prompting per item, re-prompting on
/// malformed numbers.
fn resolve_quantities(
    rl: &mut DefaultEditor,
    tokens: Vec<ItemToken>,
) -> Result<Option<Vec<(String, u32)>>> {
    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        let quantity = match token.quantity {
            Some(quantity) => quantity,
            None => loop {
                let prompt = format!("Enter quantity for {}: ", token.name);
                let Some(line) = read_line(rl, &prompt)? else {
                    return Ok(None);
                };
                match line.parse() {
                    Ok(quantity) => break quantity,
                    Err(_) => println!("Invalid input. Please enter a valid number."),
                }
            },
        };
        resolved.push((token.name, quantity));
    }
    Ok(Some(resolved))
}

fn handle_open(rl: &mut DefaultEditor, cafe: &mut Cafe) -> Result<()> {
    let Some(table) = prompt_number(rl, &format!("Enter table number (1-{TABLE_COUNT}): "))?
    else {
        return Ok(());
    };
    match cafe.open_order(table) {
        Ok(number) => println!("Opened new order for table {table} with Order #{number}."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn handle_add_items(rl: &mut DefaultEditor, cafe: &mut Cafe) -> Result<()> {
    let Some(table) = prompt_number(rl, &format!("Enter table number (1-{TABLE_COUNT}): "))?
    else {
        return Ok(());
    };
    let Some(input) = read_line(rl, "Enter items and quantities (e.g. Coffee 2, Tea 1): ")?
    else {
        return Ok(());
    };
    let Some(batch) = resolve_quantities(rl, parse_item_tokens(&input))? else {
        return Ok(());
    };
    match cafe.add_items(table, &batch) {
        Ok(outcome) => {
            for (name, quantity) in &outcome.added {
                println!("Added {quantity} {name}(s) to the order.");
            }
            for name in &outcome.unavailable {
                println!("{name} is not available on the menu.");
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn handle_close(rl: &mut DefaultEditor, cafe: &mut Cafe) -> Result<()> {
    let Some(table) = prompt_number(rl, &format!("Enter table number (1-{TABLE_COUNT}): "))?
    else {
        return Ok(());
    };
    // Check the precondition before asking about packaging, so a free table
    // doesn't get a pointless prompt.
    match cafe.active_order_number(table) {
        Ok(Some(_)) => {}
        Ok(None) => {
            println!("No active order for table {table} to close.");
            return Ok(());
        }
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    }
    let Some(packaging) = prompt_yes_no(rl, "Do you want packaging for this order (yes/no)? ")?
    else {
        return Ok(());
    };
    match cafe.close_order(table, packaging) {
        Ok(bill) => {
            println!("Order #{} for table {table} closed.", bill.order_number);
            println!("{}", report::format_order_report(&bill));
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn handle_past_orders(cafe: &Cafe) {
    println!("\nCompleted Orders:");
    for past in cafe.past_orders() {
        println!(
            "Order #{} for Table {} placed on {}",
            past.order_number, past.table_number, past.order_time
        );
    }
}

fn handle_summary(rl: &mut DefaultEditor, cafe: &Cafe) -> Result<()> {
    let Some(number) = prompt_number(rl, "Enter order number: ")? else {
        return Ok(());
    };
    match cafe.order_summary(number) {
        Ok(bill) => println!("\n{}", report::format_order_report(&bill)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Runs the operator command loop until exit.
pub fn run(cafe: &mut Cafe) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        println!("\nBiscotti Cafe Order System");
        println!("1. Open order for a table");
        println!("2. Add items to order");
        println!("3. Close order");
        println!("4. View completed orders");
        println!("5. View order summary");
        println!("6. Exit");

        let Some(choice) = read_line(&mut rl, "Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => handle_open(&mut rl, cafe)?,
            "2" => handle_add_items(&mut rl, cafe)?,
            "3" => handle_close(&mut rl, cafe)?,
            "4" => handle_past_orders(cafe),
            "5" => handle_summary(&mut rl, cafe)?,
            "6" => break,
            _ => println!("Invalid choice, please try again."),
        }
    }
    println!("Exiting the system. Thank you!");
    Ok(())
}
