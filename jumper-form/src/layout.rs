//! Screen positions of form fields.
//!
//! Inputs take one row each, label first. Adjacent selections share a row
//! inside a fixed-width block centered in the frame. Rows are spaced by field
//! index, so the layout of a field never depends on the values being edited.

use jumper_form_types::FieldDescriptor;

/// Columns the frame spends on borders and padding, both sides together.
pub const FRAME_CHROME: u16 = 4;

/// Rows the frame spends outside the fields: two border rows, the header
/// and the footer.
pub const FRAME_CHROME_ROWS: u16 = 4;

/// Width of the centered block holding a pair of selections.
pub const SELECTION_BLOCK_WIDTH: u16 = 22;

/// Column where input labels start.
pub const LABEL_COLUMN: u16 = 1;

/// Where a field sits inside the frame interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: u16,
    /// First column of the value (inputs) or of the name (selections).
    pub start_column: u16,
    /// Cells available for the value (inputs) or the name length (selections).
    pub width: u16,
}

/// Computed anchors for every field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    anchors: Vec<Anchor>,
    interior_width: u16,
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Label text drawn in front of an input value.
pub(crate) fn label_text(name: &str) -> String {
    format!("{name}: ")
}

impl Layout {
    /// Lay out `fields` inside a frame `frame_width` columns wide.
    pub fn compute(fields: &[FieldDescriptor], frame_width: u16) -> Self {
        let interior_width = frame_width.saturating_sub(FRAME_CHROME);
        let mut anchors = Vec::with_capacity(fields.len());

        let mut idx = 0;
        while idx < fields.len() {
            let field = &fields[idx];
            let row = u16::try_from(idx * 2).unwrap_or(u16::MAX);

            if field.kind().is_input() {
                let start_column = LABEL_COLUMN + text_width(&label_text(field.name()));
                anchors.push(Anchor {
                    row,
                    start_column,
                    width: interior_width
                        .saturating_sub(start_column)
                        .saturating_sub(1),
                });
                idx += 1;
                continue;
            }

            let row = row + 1;
            let first_width = text_width(field.name());
            match fields.get(idx + 1).filter(|next| next.kind().is_selection()) {
                Some(partner) => {
                    let second_width = text_width(partner.name());
                    let first_column =
                        interior_width.saturating_sub(SELECTION_BLOCK_WIDTH) / 2;
                    let second_column = first_column
                        + SELECTION_BLOCK_WIDTH
                            .saturating_sub(second_width)
                            .max(first_width + 1);
                    anchors.push(Anchor {
                        row,
                        start_column: first_column,
                        width: first_width,
                    });
                    anchors.push(Anchor {
                        row,
                        start_column: second_column,
                        width: second_width,
                    });
                    idx += 2;
                }
                None => {
                    anchors.push(Anchor {
                        row,
                        start_column: interior_width.saturating_sub(first_width) / 2,
                        width: first_width,
                    });
                    idx += 1;
                }
            }
        }

        Self {
            anchors,
            interior_width,
        }
    }

    /// Get the anchor of the field at `idx`.
    pub fn anchor(&self, idx: usize) -> Option<Anchor> {
        self.anchors.get(idx).copied()
    }

    /// Check whether two fields share a display row.
    pub fn same_row(&self, a: usize, b: usize) -> bool {
        match (self.anchor(a), self.anchor(b)) {
            (Some(a), Some(b)) => a.row == b.row,
            _ => false,
        }
    }

    pub fn interior_width(&self) -> u16 {
        self.interior_width
    }

    /// Number of interior rows the fields need.
    pub fn interior_height(&self) -> u16 {
        self.anchors.iter().map(|a| a.row + 1).max().unwrap_or(0)
    }
}
