//! Form field schemas
//!
//! Each form is an ordered table of fields. The kind of a field decides which
//! input widget renders it and which keystrokes it accepts.

/// Where a select field takes its options from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// Names of the current categories
    Categories,
    /// Configured payers
    Payers,
}

/// Input kind for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Money amount (digits and a decimal point)
    Amount,
    /// ISO date
    Date,
    /// One of an enumerated set of options
    Select(OptionSource),
}

impl FieldKind {
    /// Whether a typed character is accepted by this kind of field
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Amount => c.is_ascii_digit() || c == '.',
            Self::Date => c.is_ascii_digit() || c == '-',
            Self::Select(_) => false,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}

/// A single field in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable key used to read and write the value
    pub key: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    pub kind: FieldKind,
    /// Hint shown while the field is empty
    pub placeholder: &'static str,
}

/// An ordered form definition
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    /// Position of a field by key
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// The "Add Expense" form
pub static EXPENSE_FORM: FormSchema = FormSchema {
    title: "Add Expense",
    submit_label: "Add Expense",
    fields: &[
        FieldSpec {
            key: "category",
            label: "Category",
            kind: FieldKind::Select(OptionSource::Categories),
            placeholder: "Select category",
        },
        FieldSpec {
            key: "amount",
            label: "Amount",
            kind: FieldKind::Amount,
            placeholder: "0.00",
        },
        FieldSpec {
            key: "date",
            label: "Date",
            kind: FieldKind::Date,
            placeholder: "YYYY-MM-DD",
        },
        FieldSpec {
            key: "paidBy",
            label: "Paid By",
            kind: FieldKind::Select(OptionSource::Payers),
            placeholder: "Select payer",
        },
    ],
};

/// The "Add Category" form
pub static CATEGORY_FORM: FormSchema = FormSchema {
    title: "Add New Category",
    submit_label: "Add Category",
    fields: &[
        FieldSpec {
            key: "name",
            label: "Name",
            kind: FieldKind::Text,
            placeholder: "Category name",
        },
        FieldSpec {
            key: "budget",
            label: "Budget",
            kind: FieldKind::Amount,
            placeholder: "0.00",
        },
        FieldSpec {
            key: "emoji",
            label: "Emoji",
            kind: FieldKind::Text,
            placeholder: "🛒",
        },
        FieldSpec {
            key: "color",
            label: "Color",
            kind: FieldKind::Text,
            placeholder: "#rrggbb",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_form_layout() {
        let keys: Vec<&str> = EXPENSE_FORM.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, ["category", "amount", "date", "paidBy"]);
        assert_eq!(
            EXPENSE_FORM.field("paidBy").map(|f| f.kind),
            Some(FieldKind::Select(OptionSource::Payers))
        );
        assert_eq!(EXPENSE_FORM.index_of("date"), Some(2));
        assert_eq!(EXPENSE_FORM.index_of("memo"), None);
    }

    #[test]
    fn test_category_form_layout() {
        let keys: Vec<&str> = CATEGORY_FORM.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, ["name", "budget", "emoji", "color"]);
        assert!(CATEGORY_FORM.fields.iter().all(|f| !f.kind.is_select()));
    }

    #[test]
    fn test_field_kind_accepts() {
        assert!(FieldKind::Amount.accepts('7'));
        assert!(FieldKind::Amount.accepts('.'));
        assert!(!FieldKind::Amount.accepts('e'));
        assert!(FieldKind::Date.accepts('-'));
        assert!(!FieldKind::Date.accepts('/'));
        assert!(FieldKind::Text.accepts('🥡'));
        assert!(!FieldKind::Text.accepts('\n'));
        assert!(!FieldKind::Select(OptionSource::Payers).accepts('a'));
    }
}
