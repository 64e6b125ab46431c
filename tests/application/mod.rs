mod script_parser_test;
