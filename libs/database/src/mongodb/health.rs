use mongodb::{Database, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the database.
pub async fn check_health(db: &Database) -> DatabaseResult<()> {
    db.run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::{MongoConfig, client_options};
    use mongodb::Client;

    async fn unreachable_db() -> Database {
        let config = MongoConfig::new("mongodb://127.0.0.1:1", "shop").with_timeouts(1, 1);
        let client = Client::with_options(client_options(&config).await.unwrap()).unwrap();
        client.database("shop")
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unhealthy() {
        let db = unreachable_db().await;
        let err = check_health(&db).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
    }
}
