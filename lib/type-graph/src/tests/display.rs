use type_graph_config::{display::DisplayOptions, HideRule};

use crate::tests::testkit::{init_logger, library_graph};

#[test]
fn lists_every_type_with_members() {
    init_logger();
    let graph = library_graph(&DisplayOptions::default());

    insta::assert_snapshot!(graph.to_string(), @r"
    OBJECT Query
      book(id: ID!): Book
      books(first: Int = 10, genre: Genre): [Book!]!
      search(term: String!): [SearchResult]
      node(id: ID!): Node
      legacyBooks: [Book] (deprecated: Use books)
      stats: HiddenStats
    OBJECT Mutation
      addBook(input: BookInput!): Book
    INTERFACE Node implemented by Book, Author
      id: ID!
    OBJECT Book implements Node
      id: ID!
      title: String!
      author: Author
      isbn: String (deprecated: Removed)
      related: [Book!]
    OBJECT Author implements Node
      id: ID!
      name: String!
      books: [Book!]!
    UNION SearchResult = Book | Author
    ENUM Genre
      FICTION
      HISTORY
      POETRY (deprecated)
    INPUT_OBJECT BookInput
      title: String!
      authorId: ID
      genre: Genre = FICTION
    OBJECT HiddenStats
      count: Int!
      label: String
    SCALAR ID
    SCALAR String
    SCALAR Int
    SCALAR Boolean
    ");
}

#[test]
fn shows_hidden_and_spliced_types() {
    init_logger();
    let graph = library_graph(&DisplayOptions {
        sort_by_alphabet: true,
        skip_deprecated: true,
        hide_rules: vec![HideRule::new("^Hidden").with_proxy_field("count")],
        ..Default::default()
    });

    insta::assert_snapshot!(graph.to_string(), @r"
    OBJECT Author implements Node
      books: [Book!]!
      id: ID!
      name: String!
    OBJECT Book implements Node
      author: Author
      id: ID!
      related: [Book!]
      title: String!
    INPUT_OBJECT BookInput
      authorId: ID
      genre: Genre = FICTION
      title: String!
    SCALAR Boolean
    ENUM Genre
      FICTION
      HISTORY
      POETRY (deprecated)
    OBJECT HiddenStats (hidden)
      count: Int!
      label: String
    SCALAR ID
    SCALAR Int
    OBJECT Mutation
      addBook(input: BookInput!): Book
    INTERFACE Node implemented by Author, Book
      id: ID!
    OBJECT Query
      book(id: ID!): Book
      books(first: Int = 10, genre: Genre): [Book!]!
      node(id: ID!): Node
      search(term: String!): [SearchResult]
      stats: Int!
    UNION SearchResult = Author | Book
    SCALAR String
    ");
}
