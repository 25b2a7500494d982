mod print_document_tests;
