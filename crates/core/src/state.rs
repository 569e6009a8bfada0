use serde::{Deserialize, Serialize};

/// Player cash shared between the menu and rounds. Rounds only touch it
/// through `debit` and `credit`; a negative balance is not prevented.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bankroll {
    balance: i64,
}

impl Bankroll {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn set(&mut self, balance: i64) {
        self.balance = balance;
    }

    pub fn debit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub fn credit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn can_cover(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}
