//! Run with `cargo run --example mysql_usage --features mysql`, configuration
//! read as JSON from `QUARRY_MYSQL_CONFIG`

use quarry_core::{
    op, transaction, Column, Comparison, Configuration, Connection, Error, Insert, MySqlEngine,
    Select, Statement, Table, Update,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quarry_core=debug")),
        )
        .init();

    let config = match std::env::var("QUARRY_MYSQL_CONFIG") {
        Ok(json) => Configuration::from_json(&json)?,
        Err(_) => Configuration::new("quarry_demo").with_credentials("root", ""),
    };

    let engine = match MySqlEngine::connect(&config).await {
        Ok(engine) => engine,
        Err(Error::WrongCredentials { message }) => {
            eprintln!("access denied: {}", message);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    engine
        .execute(
            "CREATE TEMPORARY TABLE accounts \
             (id INT AUTO_INCREMENT PRIMARY KEY, email VARCHAR(255) NOT NULL UNIQUE, logins INT NOT NULL DEFAULT 0)",
        )
        .await?;

    let accounts = Table::new("accounts")
        .with_column(Column::new("id"))
        .with_column(Column::new("email"))
        .with_column(Column::new("logins"));

    let id = transaction(&engine, || async {
        Insert::new(accounts.clone())
            .value("email", "alice@example.com")
            .execute(Some(&engine))
            .await?;
        Ok(engine.last_insert_id())
    })
    .await?;
    println!("inserted account {}", id);

    Update::new(accounts.clone())
        .set("logins", 1)
        .where_(("id", id as i64))
        .require_where()
        .execute(Some(&engine))
        .await?;

    let mut rows = Select::new(accounts.clone())
        .where_(Comparison::new("logins", op::GTE, 1))
        .execute(Some(&engine))
        .await?;
    while let Some(row) = rows.fetch() {
        println!("{}", serde_json::Value::Object(row));
    }

    if let Err(err) = Insert::new(accounts)
        .value("email", "alice@example.com")
        .execute(Some(&engine))
        .await
    {
        println!("duplicate rejected as {:?}: {}", err.kind(), err);
    }

    engine.close().await?;
    Ok(())
}
