//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use rolo_core::{
  birthday::BirthdayWindow,
  contact::ContactFields,
  store::{ContactStore, Page},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fields(first: &str, last: &str, email: &str, birthday: NaiveDate) -> ContactFields {
  ContactFields {
    first_name:   first.into(),
    last_name:    last.into(),
    email:        email.into(),
    phone_number: "555-0100".into(),
    birthday,
  }
}

fn ada() -> ContactFields {
  fields("Ada", "Lovelace", "ada@example.com", date(1815, 12, 10))
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get() {
  let s = store().await;

  let created = s.create(ada()).await.unwrap();
  assert_eq!(ContactFields::from(created.clone()), ada());

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn ids_are_unique_and_not_reused() {
  let s = store().await;

  let a = s.create(ada()).await.unwrap();
  let b = s.create(ada()).await.unwrap();
  assert_ne!(a.id, b.id);

  s.delete(b.id).await.unwrap();
  let c = s.create(ada()).await.unwrap();
  assert!(c.id > b.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_every_field() {
  let s = store().await;
  let created = s.create(ada()).await.unwrap();

  let replacement = ContactFields {
    first_name:   "Augusta".into(),
    last_name:    "King".into(),
    email:        "countess@lovelace.example".into(),
    phone_number: "555-0199".into(),
    birthday:     date(1815, 12, 11),
  };
  let updated = s.update(created.id, replacement.clone()).await.unwrap().unwrap();
  assert_eq!(updated.id, created.id);
  assert_eq!(ContactFields::from(updated), replacement);

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(ContactFields::from(fetched), replacement);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  assert!(s.update(7, ada()).await.unwrap().is_none());
  assert!(s.list(Page::default()).await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_prior_row_then_get_is_none() {
  let s = store().await;
  let created = s.create(ada()).await.unwrap();

  let deleted = s.delete(created.id).await.unwrap();
  assert_eq!(deleted, Some(created.clone()));
  assert!(s.get(created.id).await.unwrap().is_none());
  assert!(s.delete(created.id).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_id_ordered_and_paginated() {
  let s = store().await;
  let mut ids = Vec::new();
  for i in 0..15 {
    let c = s
      .create(fields(&format!("P{i}"), "Person", &format!("p{i}@example.com"), date(1990, 1, 1)))
      .await
      .unwrap();
    ids.push(c.id);
  }

  let first = s.list(Page::default()).await.unwrap();
  assert_eq!(first.len(), 10);
  assert_eq!(first.iter().map(|c| c.id).collect::<Vec<_>>(), ids[..10]);

  let rest = s.list(Page::new(10, 10)).await.unwrap();
  assert_eq!(rest.iter().map(|c| c.id).collect::<Vec<_>>(), ids[10..]);

  assert!(s.list(Page::new(100, 10)).await.unwrap().is_empty());
  assert!(s.list(Page::new(0, 0)).await.unwrap().is_empty());
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_any_name_or_email_ignoring_case() {
  let s = store().await;
  let ada = s.create(ada()).await.unwrap();
  let grace = s
    .create(fields("Grace", "Hopper", "grace@navy.example", date(1906, 12, 9)))
    .await
    .unwrap();
  let alan = s
    .create(fields("Alan", "Turing", "alan@EXAMPLE.COM", date(1912, 6, 23)))
    .await
    .unwrap();

  let hits = s.search("lovelace", Page::default()).await.unwrap();
  assert_eq!(hits, vec![ada.clone()]);

  let hits = s.search("GRACE", Page::default()).await.unwrap();
  assert_eq!(hits, vec![grace]);

  let hits = s.search("example.com", Page::default()).await.unwrap();
  assert_eq!(hits, vec![ada, alan]);
}

#[tokio::test]
async fn search_does_not_match_phone_numbers() {
  let s = store().await;
  s.create(ada()).await.unwrap();
  assert!(s.search("0100", Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  s.create(ada()).await.unwrap();
  let odd = s
    .create(fields("Under_score", "Percent%", "odd@example.com", date(2000, 1, 1)))
    .await
    .unwrap();

  assert_eq!(s.search("_", Page::default()).await.unwrap(), vec![odd.clone()]);
  assert_eq!(s.search("%", Page::default()).await.unwrap(), vec![odd]);
}

#[tokio::test]
async fn search_folds_case_beyond_ascii() {
  let s = store().await;
  let emile = s
    .create(fields("Émile", "Zola", "emile@example.fr", date(1840, 4, 2)))
    .await
    .unwrap();
  let zoe = s
    .create(fields("Zoë", "Kravitz", "zoe@example.com", date(1988, 12, 1)))
    .await
    .unwrap();

  assert_eq!(s.search("émile", Page::default()).await.unwrap(), vec![emile]);
  assert_eq!(s.search("ZOË", Page::default()).await.unwrap(), vec![zoe]);
}

#[tokio::test]
async fn empty_search_matches_everything() {
  let s = store().await;
  s.create(ada()).await.unwrap();
  s.create(fields("Grace", "Hopper", "grace@navy.example", date(1906, 12, 9)))
    .await
    .unwrap();
  assert_eq!(s.search("", Page::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn search_is_paginated() {
  let s = store().await;
  for i in 0..5 {
    s.create(fields("Sam", &format!("Smith{i}"), "sam@example.com", date(1980, 5, 5)))
      .await
      .unwrap();
  }

  let page = s.search("smith", Page::new(3, 10)).await.unwrap();
  assert_eq!(page.len(), 2);
  assert_eq!(page[0].last_name, "Smith3");
}

// ─── Birthdays ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn upcoming_birthdays_ignore_year() {
  let s = store().await;
  let in_window = s
    .create(fields("In", "Window", "in@example.com", date(1970, 6, 12)))
    .await
    .unwrap();
  let on_edge = s
    .create(fields("On", "Edge", "edge@example.com", date(2001, 6, 17)))
    .await
    .unwrap();
  s.create(fields("Too", "Late", "late@example.com", date(1970, 6, 18)))
    .await
    .unwrap();
  s.create(fields("Too", "Early", "early@example.com", date(1970, 6, 9)))
    .await
    .unwrap();

  let window = BirthdayWindow::starting(date(2024, 6, 10), 7);
  let hits = s.upcoming_birthdays(&window).await.unwrap();
  assert_eq!(hits, vec![in_window, on_edge]);
}

#[tokio::test]
async fn upcoming_birthdays_wrap_past_new_year() {
  let s = store().await;
  let january = s
    .create(fields("Jan", "Second", "jan@example.com", date(1980, 1, 2)))
    .await
    .unwrap();
  let december = s
    .create(fields("Dec", "Thirtieth", "dec@example.com", date(1975, 12, 30)))
    .await
    .unwrap();
  s.create(fields("Mid", "Year", "mid@example.com", date(1975, 7, 1)))
    .await
    .unwrap();

  let window = BirthdayWindow::starting(date(2024, 12, 28), 7);
  let hits = s.upcoming_birthdays(&window).await.unwrap();
  // December comes first: it is sooner from the 28th.
  assert_eq!(hits, vec![december, january]);
}

// ─── Scenario ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ada_lifecycle() {
  let s = store().await;

  let created = s.create(ada()).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(ContactFields::from(fetched), ada());

  let hits = s.search("lovelace", Page::default()).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].id, created.id);

  s.delete(created.id).await.unwrap().unwrap();
  assert!(s.get(created.id).await.unwrap().is_none());
}
