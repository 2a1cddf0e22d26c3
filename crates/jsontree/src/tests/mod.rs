mod lexer;
