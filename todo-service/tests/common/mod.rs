use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenService;
use todo_service::domain::book::errors::BookError;
use todo_service::domain::book::models::Book;
use todo_service::domain::book::models::BookId;
use todo_service::domain::book::ports::BookRepository;
use todo_service::domain::book::service::BookService;
use todo_service::domain::store::MemoryStore;
use todo_service::domain::todo::models::seed_todos;
use todo_service::domain::todo::service::TodoService;
use todo_service::inbound::http::router::create_router;
use tokio::sync::RwLock;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(TEST_SECRET));
        let todo_service = Arc::new(TodoService::new(MemoryStore::with_entities(seed_todos())));
        let book_service = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new())));

        let router = create_router(todo_service, book_service, token_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TEST_SECRET),
        }
    }

    /// Log in and return the issued bearer token
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .post("/login")
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Token missing").to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}

/// In-memory stand-in for the Postgres book repository, so the HTTP suite
/// runs without a database.
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|b| b.id == *id)
            .cloned())
    }

    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;
        let existing = books
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or(BookError::NotFound(book.id.to_string()))?;
        *existing = book.clone();
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != *id);
        if books.len() == before {
            return Err(BookError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
