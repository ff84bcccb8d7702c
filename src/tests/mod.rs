mod fk_test;
