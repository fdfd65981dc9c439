//! Statements an account/authentication layer issues over its table maps

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use futures::future::{BoxFuture, FutureExt};
use quarry_core::{
    op, transaction, Column, Comparison, Connection, Delete, DriverFailure, Error, ErrorKind,
    Insert, Join, JoinType, On, QueryResult, Result, Row, Select, SortDirection, Statement, Table,
    Update,
};
use serde::Deserialize;
use serde_json::json;

const USERS: &str = "users";
const REMEMBERED: &str = "users_remembered";
const THROTTLING: &str = "users_throttling";

fn users_table() -> Table {
    Table::new(USERS)
        .with_column(Column::aliased("id", "userId"))
        .with_column(Column::new("email"))
        .with_column(Column::new("password"))
        .with_column(Column::new("username"))
        .with_column(Column::new("status"))
        .with_column(Column::new("verified"))
        .with_column(Column::aliased("last_login", "lastLogin"))
}

fn remembered_table() -> Table {
    Table::new(REMEMBERED)
        .with_column(Column::aliased("id", "rememberedId"))
        .with_column(Column::new("user"))
        .with_column(Column::new("selector"))
        .with_column(Column::new("token"))
        .with_column(Column::new("expires"))
}

fn throttling_table() -> Table {
    Table::new(THROTTLING)
        .with_column(Column::new("action_type"))
        .with_column(Column::new("selector"))
        .with_column(Column::new("time_bucket"))
        .with_column(Column::new("attempts"))
}

fn user_join() -> Join {
    Join::on(
        users_table(),
        On::equals("user", "id")
            .with_first_alias(REMEMBERED)
            .with_second_alias(USERS),
    )
    .with_type(JoinType::Inner)
}

/// Scripted connection: answers each statement with the next queued result
#[derive(Default)]
struct ScriptedConnection {
    log: Mutex<Vec<String>>,
    answers: Mutex<Vec<Result<QueryResult>>>,
    last_insert_id: AtomicU64,
}

impl ScriptedConnection {
    fn answer(self, result: Result<QueryResult>) -> Self {
        self.answers.lock().unwrap().push(result);
        self
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl Connection for ScriptedConnection {
    fn execute<'a>(&'a self, sql: &'a str) -> BoxFuture<'a, Result<QueryResult>> {
        async move {
            self.log.lock().unwrap().push(sql.to_string());
            let mut answers = self.answers.lock().unwrap();
            let answer = if answers.is_empty() {
                Ok(QueryResult::default())
            } else {
                answers.remove(0)
            };
            if let Ok(result) = &answer {
                if result.last_insert_id() > 0 {
                    self.last_insert_id
                        .store(result.last_insert_id(), Ordering::SeqCst);
                }
            }
            answer
        }
        .boxed()
    }

    fn begin_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.log.lock().unwrap().push("BEGIN".to_string());
            Ok(())
        }
        .boxed()
    }

    fn end_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.log.lock().unwrap().push("COMMIT".to_string());
            Ok(())
        }
        .boxed()
    }

    fn rollback_transaction(&self) -> BoxFuture<'_, Result<()>> {
        async move {
            self.log.lock().unwrap().push("ROLLBACK".to_string());
            Ok(())
        }
        .boxed()
    }

    fn last_insert_id(&self) -> u64 {
        self.last_insert_id.load(Ordering::SeqCst)
    }
}

fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().unwrap()
}

#[derive(Debug, Deserialize)]
struct RememberedLogin {
    #[serde(rename = "userId")]
    user_id: i64,
    email: String,
    token: String,
}

#[tokio::test]
async fn test_remember_me_lookup_joins_users() {
    let conn = ScriptedConnection::default().answer(Ok(QueryResult::from_rows(vec![row(json!({
        "rememberedId": 4,
        "user": 9,
        "selector": "sel",
        "token": "hash",
        "expires": 1_900_000_000,
        "userId": 9,
        "email": "ann@example.com",
        "password": "pw",
        "username": "ann",
        "status": 0,
        "verified": 1,
        "lastLogin": null
    }))])));

    let lookup = Select::new(remembered_table())
        .join(user_join())
        .where_(Comparison::new("selector", op::EQ, "sel").with_alias(REMEMBERED))
        .with_connection(&conn);

    assert_eq!(
        lookup.generate(),
        "SELECT users_remembered.id AS rememberedId, users_remembered.user, users_remembered.selector, \
         users_remembered.token, users_remembered.expires, users.id AS userId, users.email, \
         users.password, users.username, users.status, users.verified, users.last_login AS lastLogin \
         FROM users_remembered INNER JOIN users ON users_remembered.user = users.id \
         WHERE users_remembered.selector = 'sel'"
    );

    let mut result = lookup.execute(None).await.unwrap();
    let login: RememberedLogin = result.fetch_as().unwrap().unwrap();
    assert_eq!(login.user_id, 9);
    assert_eq!(login.email, "ann@example.com");
    assert_eq!(login.token, "hash");
}

#[tokio::test]
async fn test_registration_reports_new_id() {
    let conn = ScriptedConnection::default().answer(Ok(QueryResult::affected(1, 42)));

    let register = Insert::new(users_table())
        .value("email", "o'neil@example.com")
        .value("password", "$2y$10$hash")
        .value("username", "o'neil")
        .value("verified", 0)
        .value("registered", 1_700_000_000)
        .with_connection(&conn);

    let result = register.execute(None).await.unwrap();
    assert_eq!(result.last_insert_id(), 42);
    assert_eq!(conn.last_insert_id(), 42);
    assert_eq!(
        conn.log(),
        vec![
            "INSERT INTO users (email, password, username, verified, registered) \
             VALUES ('o\\'neil@example.com', '$2y$10$hash', 'o\\'neil', '0', '1700000000')"
        ]
    );
}

#[tokio::test]
async fn test_duplicate_registration_is_classified() {
    let conn = ScriptedConnection::default().answer(Err(DriverFailure::new(
        "Duplicate entry 'ann@example.com' for key 'email'",
    )
    .with_code("23000")
    .with_vendor_code(1062)
    .classify()));

    let err = Insert::new(users_table())
        .value("email", "ann@example.com")
        .execute(Some(&conn))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IntegrityConstraintViolation);
    assert_eq!(
        err.driver_message(),
        Some("Duplicate entry 'ann@example.com' for key 'email'")
    );
}

#[tokio::test]
async fn test_throttle_bucket_update_in_transaction() {
    let conn = ScriptedConnection::default()
        .answer(Ok(QueryResult::from_rows(vec![row(json!({"attempts": 2}))])))
        .answer(Ok(QueryResult::affected(1, 0)));

    let attempts = transaction(&conn, || async {
        let bucket = || {
            [
                Comparison::new("action_type", op::EQ, "login"),
                Comparison::new("selector", op::EQ, "127.0.0.1"),
                Comparison::new("time_bucket", op::EQ, 28_333_333),
            ]
        };

        let mut select = Select::new(throttling_table());
        for condition in bucket() {
            select = select.where_(condition);
        }
        let mut current = select.execute(Some(&conn)).await?;
        let attempts = current
            .fetch()
            .and_then(|row| row["attempts"].as_i64())
            .unwrap_or(0)
            + 1;

        let mut update = Update::new(throttling_table())
            .set("attempts", attempts)
            .require_where();
        for condition in bucket() {
            update = update.where_(condition);
        }
        update.execute(Some(&conn)).await?;
        Ok(attempts)
    })
    .await
    .unwrap();

    assert_eq!(attempts, 3);
    let log = conn.log();
    assert_eq!(log.first().map(String::as_str), Some("BEGIN"));
    assert_eq!(
        log[2],
        "UPDATE users_throttling SET attempts='3' \
         WHERE action_type = 'login' AND selector = '127.0.0.1' AND time_bucket = '28333333'"
    );
    assert_eq!(log.last().map(String::as_str), Some("COMMIT"));
}

#[tokio::test]
async fn test_failed_confirmation_rolls_back() {
    let conn = ScriptedConnection::default().answer(Err(DriverFailure::new(
        "Unknown column 'verifed' in 'field list'",
    )
    .with_code("42S22")
    .classify()));

    let result: Result<()> = transaction(&conn, || async {
        Update::new(users_table())
            .set("verifed", 1)
            .where_(("email", "ann@example.com"))
            .execute(Some(&conn))
            .await?;
        Delete::new(remembered_table())
            .where_(("user", 9))
            .execute(Some(&conn))
            .await?;
        Ok(())
    })
    .await;

    assert!(matches!(result, Err(Error::UnknownColumn { .. })));
    assert_eq!(
        conn.log(),
        vec![
            "BEGIN",
            "UPDATE users SET verifed='1' WHERE email = 'ann@example.com'",
            "ROLLBACK"
        ]
    );
}

#[tokio::test]
async fn test_unguarded_cleanup_and_guarded_refusal() {
    let conn = ScriptedConnection::default();

    let expired = Delete::new(remembered_table())
        .where_(Comparison::new("expires", op::LT, 1_700_000_000))
        .with_connection(&conn);
    expired.execute(None).await.unwrap();

    let refused = Delete::new(users_table()).require_where().with_connection(&conn);
    assert!(matches!(
        refused.execute(None).await,
        Err(Error::EmptyWhereClause { .. })
    ));

    assert_eq!(
        conn.log(),
        vec!["DELETE FROM users_remembered WHERE expires < '1700000000'"]
    );
}

#[test]
fn test_recent_logins_listing() {
    let users = users_table().with_alias("u");
    let last_login = users.get_column("last_login").unwrap().clone();

    let listing = Select::new(users)
        .where_(("verified", 1))
        .where_(Comparison::new("status", op::IN, &[0, 2][..]))
        .order_by_column(&last_login, SortDirection::Desc)
        .limit(20)
        .offset(40);

    assert_eq!(
        listing.generate(),
        "SELECT u.id AS userId, u.email, u.password, u.username, u.status, u.verified, \
         u.last_login AS lastLogin FROM users AS u \
         WHERE verified = '1' AND status IN ( '0', '2' ) \
         ORDER BY u.last_login DESC LIMIT 40, 20"
    );
}

#[test]
fn test_missing_column_lookup() {
    let mut users = users_table();
    assert!(matches!(
        users.get_column("nickname"),
        Err(Error::NotFound { ref table, ref column }) if table == "users" && column == "nickname"
    ));
    assert!(users.remove_column("nickname").is_err());

    let removed = users.remove_column("password").unwrap();
    assert_eq!(removed.name(), "password");
    assert!(users.get_column("password").is_err());
}
