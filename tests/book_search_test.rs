//! Integration tests for book search and eager-loaded relations

use bookhaus::prelude::*;

/// Three books in three genres:
/// - "Brave New World" by Aldous Huxley, Science Fiction
/// - "1984" by George Orwell, Dystopian
/// - "The Great Gatsby" by F. Scott Fitzgerald, Fiction
async fn setup_fixture() -> Catalog {
    let catalog = Catalog::in_memory()
        .await
        .expect("Failed to open in-memory database");
    catalog
        .ensure_catalog_schema()
        .await
        .expect("Failed to create catalog schema");

    let session = catalog.session();
    let authors = catalog.store::<Author>(&session);
    let genres = catalog.store::<Genre>(&session);
    let books = catalog.store::<Book>(&session);

    let fixture = [
        (1, "Aldous Huxley", "Science Fiction", "Brave New World", "15.99"),
        (2, "George Orwell", "Dystopian", "1984", "19.84"),
        (3, "F. Scott Fitzgerald", "Fiction", "The Great Gatsby", "10.00"),
    ];
    for (id, author, genre, title, amount) in fixture {
        authors.create(Author::with_id(id, author)).await.unwrap();
        genres.create(Genre::with_id(id, genre)).await.unwrap();
        books
            .create(Book::new(title, amount.parse().unwrap(), 5, id, id).with_id(id))
            .await
            .unwrap();
    }
    session.commit().await.unwrap();

    catalog
}

fn titles(found: &[BookDetails]) -> Vec<&str> {
    found.iter().map(|d| d.book.title.as_str()).collect()
}

#[tokio::test]
async fn test_search_by_genre_name() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    let found = books.search_books("dystopian").await.unwrap();

    assert_eq!(titles(&found), vec!["1984"]);
    assert_eq!(found[0].author.name, "George Orwell");
    assert_eq!(found[0].author.id, Some(2));
    assert_eq!(found[0].genre.name, "Dystopian");
}

#[tokio::test]
async fn test_search_matches_author_name_only() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    let found = books.search_books("orwell").await.unwrap();
    assert_eq!(titles(&found), vec!["1984"]);
}

#[tokio::test]
async fn test_search_matches_title() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    let found = books.search_books("gatsby").await.unwrap();
    assert_eq!(titles(&found), vec!["The Great Gatsby"]);
}

#[tokio::test]
async fn test_search_ignores_case() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    for term in ["DYSTOPIAN", "DyStOpIaN", "George ORWELL"] {
        let found = books.search_books(term).await.unwrap();
        assert_eq!(titles(&found), vec!["1984"], "term {term:?}");
    }
}

#[tokio::test]
async fn test_search_ors_across_columns() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    // "Science Fiction" and "Fiction" both contain the term
    let found = books.search_books("fiction").await.unwrap();
    assert_eq!(titles(&found), vec!["Brave New World", "The Great Gatsby"]);
}

#[tokio::test]
async fn test_empty_or_blank_term_returns_every_book() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    for term in ["", " ", "\t\n  "] {
        let found = books.search_books(term).await.unwrap();
        assert_eq!(found.len(), 3, "term {term:?}");
        assert!(found.iter().all(|d| d.author.id == Some(d.book.author_id)));
        assert!(found.iter().all(|d| d.genre.id == Some(d.book.genre_id)));
    }
}

#[tokio::test]
async fn test_search_without_matches() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    assert!(books.search_books("tolkien").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    books
        .create(Book::new("100% Rust", "5.00".parse().unwrap(), 1, 1, 1))
        .await
        .unwrap();
    books.save().await.unwrap();

    assert_eq!(titles(&books.search_books("0%").await.unwrap()), vec!["100% Rust"]);
    assert!(books.search_books("1%").await.unwrap().is_empty());
    assert!(books.search_books("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_sees_staged_books_in_the_same_session() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    books
        .create(Book::new("Animal Farm", "8.50".parse().unwrap(), 2, 2, 2))
        .await
        .unwrap();

    let found = books.search_books("orwell").await.unwrap();
    assert_eq!(titles(&found), vec!["1984", "Animal Farm"]);
}

#[tokio::test]
async fn test_list_with_relations_loads_author_and_genre() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    let found = books.list_with_relations().await.unwrap();
    let pairs: Vec<(&str, &str)> = found
        .iter()
        .map(|d| (d.author.name.as_str(), d.genre.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Aldous Huxley", "Science Fiction"),
            ("George Orwell", "Dystopian"),
            ("F. Scott Fitzgerald", "Fiction"),
        ]
    );
}

#[tokio::test]
async fn test_books_by_author_and_genre() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    let by_orwell = books.books_by_author(2).await.unwrap();
    assert_eq!(titles(&by_orwell), vec!["1984"]);

    let fiction = books.books_by_genre(3).await.unwrap();
    assert_eq!(titles(&fiction), vec!["The Great Gatsby"]);

    assert!(books.books_by_author(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_on_empty_catalog() {
    let catalog = Catalog::in_memory().await.unwrap();
    catalog.ensure_catalog_schema().await.unwrap();
    let session = catalog.session();
    let books = catalog.store::<Book>(&session);

    assert!(books.search_books("").await.unwrap().is_empty());
    assert!(books.search_books("orwell").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let catalog = setup_fixture().await;
    let session = catalog.session();
    let authors = catalog.store::<Author>(&session);
    let genres = catalog.store::<Genre>(&session);
    let books = catalog.store::<Book>(&session);

    let zola = authors.create(Author::new("Émile Zola")).await.unwrap();
    let roman = genres.create(Genre::new("Roman")).await.unwrap();
    books
        .create(Book::new(
            "L'ÉTÉ",
            "7.00".parse().unwrap(),
            1,
            zola.id.unwrap(),
            roman.id.unwrap(),
        ))
        .await
        .unwrap();
    books.save().await.unwrap();

    for term in ["ÉTÉ", "été", "Émile", "émile", "ÉMILE", "zola"] {
        let found = books.search_books(term).await.unwrap();
        assert_eq!(titles(&found), vec!["L'ÉTÉ"], "term {term:?}");
        assert_eq!(found[0].author.name, "Émile Zola");
    }
}
