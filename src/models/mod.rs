mod category;
mod month;
mod transaction;

pub(crate) use category::Category;
pub(crate) use month::MonthKey;
pub(crate) use transaction::Transaction;

#[cfg(test)]
mod tests;
