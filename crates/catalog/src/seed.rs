use crate::types::Book;

const SEED: [(&str, &str, &str, u8); 6] = [
    ("Computer Science Pro", "Chad Darby", "Computer Science", 5),
    ("Java Spring Master", "Eric Roby", "Computer Science", 5),
    ("Why 1+1 Rocks", "Adil A.", "Math", 5),
    ("How Bears Hibernate", "Bob B.", "Science", 2),
    ("A Pirate's Treasure", "Curt C.", "History", 3),
    ("Why 2+2 is better", "Dan D.", "Math", 1),
];

/// The fixed records a fresh store starts with, ids 1 through 6.
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .zip(1..)
        .map(|(&(title, author, category, rating), id)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        })
        .collect()
}
