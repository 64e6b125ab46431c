mod http_price_predictor_test;
