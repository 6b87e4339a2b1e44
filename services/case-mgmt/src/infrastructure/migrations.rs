//! 建表迁移
//!
//! 启动时由 MigrationManager 应用，两张表缺失时自动创建

use lexcm_adapter_postgres::Migration;

/// 服务的全部迁移，按版本升序
pub fn all() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "create_clients",
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        ),
        Migration::new(
            2,
            "create_cases",
            r#"
            CREATE TABLE IF NOT EXISTS cases (
                id SERIAL PRIMARY KEY,
                client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
                case_name VARCHAR(255) NOT NULL,
                description TEXT,
                status VARCHAR(50) NOT NULL DEFAULT 'Open',
                court_date TIMESTAMPTZ,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        ),
    ]
}
