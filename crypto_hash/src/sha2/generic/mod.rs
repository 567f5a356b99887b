mod sha512;
