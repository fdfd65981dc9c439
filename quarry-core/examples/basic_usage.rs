use futures::future::{BoxFuture, FutureExt};
use quarry_core::{
    op, transaction, Column, Comparison, Connection, Delete, Insert, Join, JoinType, Like, On,
    QueryResult, Select, SortDirection, Statement, Table, Update,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    email: String,
}

// Prints every statement instead of talking to a server
struct EchoConnection;

impl Connection for EchoConnection {
    fn execute<'a>(&'a self, sql: &'a str) -> BoxFuture<'a, quarry_core::Result<QueryResult>> {
        async move {
            println!("EXECUTE: {}", sql);
            if sql.starts_with("SELECT") {
                let rows = serde_json::json!([
                    {"id": 1, "email": "alice@example.com"},
                    {"id": 2, "email": "bob@example.com"}
                ]);
                let rows = rows
                    .as_array()
                    .map(|rows| rows.iter().filter_map(|r| r.as_object().cloned()).collect())
                    .unwrap_or_default();
                Ok(QueryResult::from_rows(rows))
            } else {
                Ok(QueryResult::affected(1, 0))
            }
        }
        .boxed()
    }

    fn begin_transaction(&self) -> BoxFuture<'_, quarry_core::Result<()>> {
        async {
            println!("BEGIN");
            Ok(())
        }
        .boxed()
    }

    fn end_transaction(&self) -> BoxFuture<'_, quarry_core::Result<()>> {
        async {
            println!("COMMIT");
            Ok(())
        }
        .boxed()
    }

    fn rollback_transaction(&self) -> BoxFuture<'_, quarry_core::Result<()>> {
        async {
            println!("ROLLBACK");
            Ok(())
        }
        .boxed()
    }

    fn last_insert_id(&self) -> u64 {
        0
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Quarry - Basic Usage ===\n");

    let users = Table::new("users")
        .with_column(Column::new("id"))
        .with_column(Column::new("email"))
        .with_column(Column::aliased("last_login", "lastLogin"));
    let last_login = users.get_column("last_login")?.clone();

    // 1. SELECT with conditions, ordering and paging
    let select = Select::new(users.clone())
        .where_(("verified", 1))
        .where_(Like::new("email", "%@example.com"))
        .or_where(("status", op::IN, &[1, 2][..]))
        .order_by_column(&last_login, SortDirection::Desc)
        .limit(10)
        .offset(20);
    println!("1. SELECT:\n   {}\n", select.generate());

    // 2. JOIN with an aliased table
    let sessions = Table::aliased("users_remembered", "r")
        .with_column(Column::new("selector"))
        .with_column(Column::new("expires"));
    let joined = Select::new(users.clone())
        .join(
            Join::on(sessions, On::equals("user", "id").with_first_alias("r").with_second_alias("users"))
                .with_type(JoinType::Inner),
        )
        .where_(Comparison::new("expires", op::GT, 1_700_000_000).with_alias("r"));
    println!("2. JOIN:\n   {}\n", joined.generate());

    // 3. Aggregate
    let count = Select::new(users.clone()).count("id").group_by("status");
    println!("3. COUNT:\n   {}\n", count.generate());

    // 4. INSERT / UPDATE / DELETE
    let insert = Insert::new(users.clone())
        .value("email", "o'brien@example.com")
        .value("verified", 0);
    println!("4. INSERT:\n   {}\n", insert.generate());

    let update = Update::new(users.clone())
        .set("verified", 1)
        .where_(("id", 7))
        .require_where();
    println!("5. UPDATE:\n   {}\n", update.generate());

    let delete = Delete::new(users.clone()).where_(("id", 7)).limit(1);
    println!("6. DELETE:\n   {}\n", delete.generate());

    // 7. Execution and typed rows
    let conn = EchoConnection;
    let mut result = select.execute(Some(&conn)).await?;
    let users_found: Vec<User> = result.fetch_all_as()?;
    for user in &users_found {
        println!("   -> {} {}", user.id, user.email);
    }
    println!();

    // 8. Transaction
    println!("8. Transaction:");
    transaction(&conn, || async {
        insert.execute(Some(&conn)).await?;
        update.execute(Some(&conn)).await?;
        Ok(())
    })
    .await?;

    println!("\n=== Done ===");
    Ok(())
}
