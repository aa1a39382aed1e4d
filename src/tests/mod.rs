mod writer;

mod templates;

// Resolution tests
mod color;
mod resolver;
