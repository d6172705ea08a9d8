//! Request / response DTOs for the ledger routes

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::account::{Account, DepositReceipt, OpenedAccount};
use crate::transfer::TransferOutcome;

// ============================================================================
// Requests
// ============================================================================

/// POST /accounts body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OpenAccountBody {
    #[schema(example = "Ada Lovelace")]
    pub holder_name: String,
    /// 18-digit account number, spaces allowed
    #[serde(alias = "clabe")]
    #[schema(example = "032180000118359719")]
    pub account_number: String,
}

/// POST /accounts/{id}/deposit body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DepositBody {
    /// Amount in cents, must be > 0
    #[serde(alias = "cents")]
    #[schema(example = 10000)]
    pub amount: i64,
}

/// POST /transfers body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransferBody {
    pub from_id: String,
    pub to_id: String,
    /// Amount in cents, must be > 0
    #[serde(alias = "cents")]
    #[schema(example = 5000)]
    pub amount: i64,
}

// ============================================================================
// Responses
// ============================================================================

/// Account snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountData {
    #[schema(example = "01HZX3S6M6J5Q7Z0KZ8V4C2B1A")]
    pub id: String,
    pub holder_name: String,
    #[schema(example = "032180000118359719")]
    pub account_number: String,
    /// Balance in cents
    pub balance: i64,
}

impl From<OpenedAccount> for AccountData {
    fn from(opened: OpenedAccount) -> Self {
        Self {
            id: opened.id.to_string(),
            holder_name: opened.holder_name,
            account_number: opened.account_number,
            balance: opened.balance,
        }
    }
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        OpenedAccount::from(account).into()
    }
}

/// Balance after a deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepositData {
    pub id: String,
    pub balance: i64,
}

impl From<DepositReceipt> for DepositData {
    fn from(receipt: DepositReceipt) -> Self {
        Self {
            id: receipt.id.to_string(),
            balance: receipt.balance,
        }
    }
}

/// Balances of both legs after a transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransferData {
    pub from_balance: i64,
    pub to_balance: i64,
}

impl From<TransferOutcome> for TransferData {
    fn from(outcome: TransferOutcome) -> Self {
        Self {
            from_balance: outcome.from_balance,
            to_balance: outcome.to_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_aliases() {
        let body: OpenAccountBody =
            serde_json::from_str(r#"{"holder_name":"Ada","clabe":"032180000118359719"}"#).unwrap();
        assert_eq!(body.account_number, "032180000118359719");

        let body: TransferBody =
            serde_json::from_str(r#"{"from_id":"a","to_id":"b","cents":5}"#).unwrap();
        assert_eq!(body.amount, 5);
    }

    #[test]
    fn test_response_field_names() {
        let account = serde_json::to_value(AccountData {
            id: "01HZX3S6M6J5Q7Z0KZ8V4C2B1A".into(),
            holder_name: "Ada".into(),
            account_number: "032180000118359719".into(),
            balance: 100,
        })
        .unwrap();
        assert_eq!(account["account_number"], "032180000118359719");
        assert_eq!(account["balance"], 100);
        assert!(account.get("clabe").is_none());
        assert!(account.get("balance_cents").is_none());

        let deposit = serde_json::to_value(DepositData {
            id: "a".into(),
            balance: 7,
        })
        .unwrap();
        assert_eq!(deposit, serde_json::json!({"id": "a", "balance": 7}));

        let transfer = serde_json::to_value(TransferData {
            from_balance: 1,
            to_balance: 2,
        })
        .unwrap();
        assert_eq!(
            transfer,
            serde_json::json!({"from_balance": 1, "to_balance": 2})
        );
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(serde_json::from_str::<DepositBody>("{}").is_err());
    }
}
