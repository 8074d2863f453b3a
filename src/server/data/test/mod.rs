mod pet;
