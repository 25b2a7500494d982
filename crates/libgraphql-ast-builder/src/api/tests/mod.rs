mod document_api_tests;
mod type_definition_api_tests;
