mod static_store_tests;
