use sqlx::SqlitePool;

// Holdings and qualifications belong to their parent and go with it.
// Investments and investment options block deletion of their parents.
const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS investors (
        investor_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        date_of_birth TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS companies (
        company_name TEXT PRIMARY KEY,
        industry TEXT NOT NULL,
        shares_outstanding INTEGER NOT NULL,
        market_cap INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS portfolios (
        portfolio_id INTEGER PRIMARY KEY AUTOINCREMENT,
        value REAL,
        account_id INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_portfolios_account ON portfolios (account_id)",
    "CREATE TABLE IF NOT EXISTS portfolio_holdings (
        holding_id INTEGER PRIMARY KEY AUTOINCREMENT,
        portfolio_id INTEGER NOT NULL REFERENCES portfolios (portfolio_id) ON DELETE CASCADE,
        asset_class TEXT NOT NULL CHECK (asset_class IN ('bond', 'canadian_equity', 'us_equity')),
        amount REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS investments (
        reference_id INTEGER PRIMARY KEY AUTOINCREMENT,
        investor_id INTEGER NOT NULL REFERENCES investors (investor_id),
        holding TEXT NOT NULL,
        market_value REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS advisors (
        advisor_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS advisor_qualifications (
        advisor_id INTEGER NOT NULL REFERENCES advisors (advisor_id) ON DELETE CASCADE,
        qualification TEXT NOT NULL,
        PRIMARY KEY (advisor_id, qualification)
    )",
    "CREATE TABLE IF NOT EXISTS investment_options (
        reference_id INTEGER PRIMARY KEY AUTOINCREMENT,
        advisor_id INTEGER NOT NULL REFERENCES advisors (advisor_id),
        amount INTEGER NOT NULL,
        inv_type TEXT NOT NULL,
        company_name TEXT NOT NULL REFERENCES companies (company_name) ON UPDATE CASCADE
    )",
    "CREATE INDEX IF NOT EXISTS idx_investment_options_advisor ON investment_options (advisor_id)",
];

pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in STATEMENTS {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    Ok(())
}
