mod definition_starts_tests;
mod document_input_tests;
mod parse_text_tests;
