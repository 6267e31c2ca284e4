use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Expense categories offered by the budget tool
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Housing",
    "Entertainment",
    "Utilities",
    "Other",
];

/// Check if an expense category is one of the offered set
pub fn is_expense_category(category: &str) -> bool {
    EXPENSE_CATEGORIES.contains(&category)
}

/// Add an income entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddIncomeDto {
    #[validate(length(min = 1, max = 200, message = "description is required"))]
    pub description: String,
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

/// Add an expense entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExpenseDto {
    #[validate(length(min = 1, max = 200, message = "description is required"))]
    pub description: String,
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub category: String,
}

/// One ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetEntryDto {
    pub description: String,
    #[schema(value_type = f64)]
    pub amount: Decimal,
    /// Present on expense entries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Ledger totals
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BudgetSummaryDto {
    #[schema(value_type = f64)]
    pub income_total: Decimal,
    #[schema(value_type = f64)]
    pub expense_total: Decimal,
    #[schema(value_type = f64)]
    pub balance: Decimal,
}

/// The full ledger for the caller's session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BudgetLedgerDto {
    pub income: Vec<BudgetEntryDto>,
    pub expenses: Vec<BudgetEntryDto>,
    pub summary: BudgetSummaryDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_set_matches_the_form_options() {
        assert!(is_expense_category("Food"));
        assert!(is_expense_category("Utilities"));
        assert!(!is_expense_category("food")); // case-sensitive select options
        assert!(!is_expense_category("Levies"));
    }
}
