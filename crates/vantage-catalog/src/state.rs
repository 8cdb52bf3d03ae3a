use std::sync::Arc;

use crate::model::{Account, AccountActivation, AccountType, Client, Currency, DocumentType, Priority};
use crate::store::Table;

/// Shared handle over all catalog tables
#[derive(Clone, Default)]
pub struct CatalogState {
    inner: Arc<Tables>,
}

#[derive(Default)]
struct Tables {
    clients: Table<Client>,
    document_types: Table<DocumentType>,
    account_types: Table<AccountType>,
    currencies: Table<Currency>,
    priorities: Table<Priority>,
    accounts: Table<Account>,
    activations: Table<AccountActivation>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients(&self) -> &Table<Client> {
        &self.inner.clients
    }

    pub fn document_types(&self) -> &Table<DocumentType> {
        &self.inner.document_types
    }

    pub fn account_types(&self) -> &Table<AccountType> {
        &self.inner.account_types
    }

    pub fn currencies(&self) -> &Table<Currency> {
        &self.inner.currencies
    }

    pub fn priorities(&self) -> &Table<Priority> {
        &self.inner.priorities
    }

    pub fn accounts(&self) -> &Table<Account> {
        &self.inner.accounts
    }

    pub fn activations(&self) -> &Table<AccountActivation> {
        &self.inner.activations
    }
}
