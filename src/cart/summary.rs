//! Order Summary

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::cart::{Cart, lines::CartLine};

/// Errors that can occur when writing an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("failed to write order summary: {0}")]
    Io(#[from] io::Error),
}

/// Tabular rendering of a cart for review before checkout.
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    cart: &'a Cart,
}

impl<'a> OrderSummary<'a> {
    /// Summarise the given cart.
    pub fn from_cart(cart: &'a Cart) -> Self {
        Self { cart }
    }

    /// Writes the summary table followed by the item count and total.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        if self.cart.is_empty() {
            writeln!(out, "Your cart is empty")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Options", "Price", "Qty", "Total"]);

        for (idx, line) in self.cart.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name().to_string(),
                options_text(line),
                format!("{}", line.total_price()),
                line.quantity().to_string(),
                format!("{}", line.line_total()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items: {}", self.cart.total_items())?;
        writeln!(out, " \x1b[1mTotal:\x1b[0m {}", self.cart.total_price())?;

        Ok(())
    }
}

fn options_text(line: &CartLine) -> String {
    line.selected_variation()
        .map(|variation| variation.name.clone())
        .into_iter()
        .chain(
            line.selected_add_ons()
                .iter()
                .map(|selected| format!("{} x{}", selected.add_on.name, selected.quantity)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
