use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::features::budget::dtos::{
    is_expense_category, AddExpenseDto, AddIncomeDto, BudgetEntryDto, BudgetLedgerDto,
    BudgetSummaryDto, EXPENSE_CATEGORIES,
};

#[derive(Debug, Clone)]
struct IncomeEntry {
    description: String,
    amount: Decimal,
}

#[derive(Debug, Clone)]
struct ExpenseEntry {
    description: String,
    amount: Decimal,
    category: String,
}

/// One identity's ledger
#[derive(Debug, Default, Clone)]
struct Ledger {
    income: Vec<IncomeEntry>,
    expenses: Vec<ExpenseEntry>,
}

impl Ledger {
    fn to_dto(&self) -> BudgetLedgerDto {
        let income_total: Decimal = self.income.iter().map(|e| e.amount).sum();
        let expense_total: Decimal = self.expenses.iter().map(|e| e.amount).sum();

        BudgetLedgerDto {
            income: self
                .income
                .iter()
                .map(|e| BudgetEntryDto {
                    description: e.description.clone(),
                    amount: e.amount,
                    category: None,
                })
                .collect(),
            expenses: self
                .expenses
                .iter()
                .map(|e| BudgetEntryDto {
                    description: e.description.clone(),
                    amount: e.amount,
                    category: Some(e.category.clone()),
                })
                .collect(),
            summary: BudgetSummaryDto {
                income_total,
                expense_total,
                balance: income_total - expense_total,
            },
        }
    }
}

/// Session-scoped budget ledger.
///
/// Ledgers live in process memory, keyed by the authenticated subject, with
/// plain read-modify-write semantics per HTTP request (last write wins). A
/// sign-out drops the subject's ledger via the identity-change subscription
/// wired up at startup.
#[derive(Default)]
pub struct BudgetService {
    ledgers: RwLock<HashMap<String, Ledger>>,
}

impl BudgetService {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_positive(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Add an income entry and return the updated ledger
    pub fn add_income(&self, sub: &str, dto: &AddIncomeDto) -> Result<BudgetLedgerDto> {
        Self::require_positive(dto.amount)?;

        let mut ledgers = self.ledgers.write().expect("budget lock poisoned");
        let ledger = ledgers.entry(sub.to_string()).or_default();
        ledger.income.push(IncomeEntry {
            description: dto.description.clone(),
            amount: dto.amount,
        });

        Ok(ledger.to_dto())
    }

    /// Add an expense entry and return the updated ledger
    pub fn add_expense(&self, sub: &str, dto: &AddExpenseDto) -> Result<BudgetLedgerDto> {
        Self::require_positive(dto.amount)?;

        if !is_expense_category(&dto.category) {
            return Err(AppError::Validation(format!(
                "category must be one of: {}",
                EXPENSE_CATEGORIES.join(", ")
            )));
        }

        let mut ledgers = self.ledgers.write().expect("budget lock poisoned");
        let ledger = ledgers.entry(sub.to_string()).or_default();
        ledger.expenses.push(ExpenseEntry {
            description: dto.description.clone(),
            amount: dto.amount,
            category: dto.category.clone(),
        });

        Ok(ledger.to_dto())
    }

    /// The caller's ledger (empty if nothing was recorded this session)
    pub fn get(&self, sub: &str) -> BudgetLedgerDto {
        let ledgers = self.ledgers.read().expect("budget lock poisoned");
        ledgers.get(sub).cloned().unwrap_or_default().to_dto()
    }

    /// Drop the caller's ledger
    pub fn clear(&self, sub: &str) {
        let mut ledgers = self.ledgers.write().expect("budget lock poisoned");
        if ledgers.remove(sub).is_some() {
            tracing::debug!("Budget ledger cleared for {}", sub);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(description: &str, amount: i64) -> AddIncomeDto {
        AddIncomeDto {
            description: description.to_string(),
            amount: Decimal::from(amount),
        }
    }

    fn expense(description: &str, amount: i64, category: &str) -> AddExpenseDto {
        AddExpenseDto {
            description: description.to_string(),
            amount: Decimal::from(amount),
            category: category.to_string(),
        }
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let service = BudgetService::new();
        service.add_income("s1", &income("Levy refund", 500)).unwrap();
        service.add_income("s1", &income("Interest", 25)).unwrap();
        service
            .add_expense("s1", &expense("Gardening", 150, "Housing"))
            .unwrap();

        let ledger = service.get("s1");
        assert_eq!(ledger.summary.income_total, Decimal::from(525));
        assert_eq!(ledger.summary.expense_total, Decimal::from(150));
        assert_eq!(ledger.summary.balance, Decimal::from(375));
        assert_eq!(ledger.income.len(), 2);
        assert_eq!(ledger.expenses.len(), 1);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let service = BudgetService::new();
        assert!(service.add_income("s1", &income("Nothing", 0)).is_err());
        assert!(service
            .add_expense("s1", &expense("Refund", -5, "Other"))
            .is_err());
        assert!(service.get("s1").income.is_empty());
    }

    #[test]
    fn unknown_expense_category_is_rejected() {
        let service = BudgetService::new();
        let err = service
            .add_expense("s1", &expense("Dues", 10, "Levies"))
            .unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn ledgers_are_scoped_per_session() {
        let service = BudgetService::new();
        service.add_income("s1", &income("Salary", 100)).unwrap();
        service.add_income("s2", &income("Salary", 40)).unwrap();

        assert_eq!(service.get("s1").summary.income_total, Decimal::from(100));
        assert_eq!(service.get("s2").summary.income_total, Decimal::from(40));
    }

    #[test]
    fn clear_drops_only_that_session() {
        let service = BudgetService::new();
        service.add_income("s1", &income("Salary", 100)).unwrap();
        service.add_income("s2", &income("Salary", 40)).unwrap();

        service.clear("s1");

        assert_eq!(service.get("s1").summary.income_total, Decimal::ZERO);
        assert_eq!(service.get("s2").summary.income_total, Decimal::from(40));
    }
}
