use bookstore_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    dto::{books::AddBookRequest, customers::RegisterRequest},
    error::AppError,
    repositories::{BookRepository, postgres::{PgBookRepository, PgCustomerRepository}},
    services::customer_service,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    seed_books(&PgBookRepository::new(pool.clone())).await?;
    ensure_customer(&PgCustomerRepository::new(pool), "reader@example.com", "reader123").await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_books(repo: &PgBookRepository) -> anyhow::Result<()> {
    if repo.count().await? > 0 {
        println!("Books already present, skipping catalog");
        return Ok(());
    }

    let books = vec![
        ("The Lord of the Rings", "J. R. R. Tolkien", 30, vec!["fantasy", "classic"]),
        ("Lord Jim", "Joseph Conrad", 15, vec!["classic", "adventure"]),
        ("The Rust Programming Language", "Steve Klabnik", 40, vec!["programming"]),
        ("Dune", "Frank Herbert", 25, vec!["science fiction"]),
        ("Middlemarch", "George Eliot", 20, vec!["classic"]),
    ];

    for (title, writer, price, tags) in books {
        repo.insert(AddBookRequest {
            title: title.to_string(),
            writer: writer.to_string(),
            cover_image_url: String::new(),
            price,
            tags: tags.into_iter().map(str::to_string).collect(),
        })
        .await?;
    }

    println!("Seeded books");
    Ok(())
}

async fn ensure_customer(
    repo: &PgCustomerRepository,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let result = customer_service::register(
        repo,
        RegisterRequest {
            name: "Demo Reader".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        },
    )
    .await;

    match result {
        Ok(customer) => println!("Created customer {} ({email})", customer.id),
        Err(AppError::EmailTaken) => println!("Customer {email} already exists"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
