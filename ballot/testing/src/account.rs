use {
    ballot_types::Addr,
    std::{collections::BTreeMap, ops::Index},
};

/// A participant in a test. The address is derived from the name, so the same
/// name always gives the same account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestAccount {
    pub name: String,
    pub address: Addr,
}

impl TestAccount {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        let name = name.into();
        let address = Addr::derive(&name);

        Self { name, address }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestAccounts(BTreeMap<String, TestAccount>);

impl TestAccounts {
    pub fn insert(&mut self, account: TestAccount) {
        self.0.insert(account.name.clone(), account);
    }

    pub fn get(&self, name: &str) -> Option<&TestAccount> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestAccount> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<&str> for TestAccounts {
    type Output = TestAccount;

    fn index(&self, name: &str) -> &Self::Output {
        self.get(name)
            .unwrap_or_else(|| panic!("account not found: {name}"))
    }
}
